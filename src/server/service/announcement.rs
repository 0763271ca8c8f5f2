//! Announcement service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    model::announcement::{
        Announcement, CreateAnnouncementParam, PaginatedAnnouncements, UpdateAnnouncementParam,
    },
};

/// Service providing business logic for location announcements.
pub struct AnnouncementService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    /// Creates a new AnnouncementService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts an announcement.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The created announcement
    /// - `Err(AppError::Validation)` - Empty title
    pub async fn create(
        &self,
        param: CreateAnnouncementParam,
    ) -> Result<Announcement, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::validation("title", "Title must not be empty"));
        }

        let announcement = AnnouncementRepository::new(self.db).create(param).await?;

        Ok(announcement)
    }

    /// Retrieves a location's announcement feed, newest first.
    pub async fn get_paginated(
        &self,
        location_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAnnouncements, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        let (announcements, total_items) = repo
            .get_paginated(location_id, page, per_page)
            .await?;

        let total_pages = (total_items as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedAnnouncements {
            announcements,
            total: total_items,
            page,
            per_page,
            total_pages,
        })
    }

    /// Edits an announcement within the caller's location.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - Updated announcement
    /// - `Err(AppError::NotFound)` - Unknown id or announcement of another location
    /// - `Err(AppError::Validation)` - Empty title
    pub async fn update(
        &self,
        param: UpdateAnnouncementParam,
        location_id: i32,
    ) -> Result<Announcement, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        if param.title.trim().is_empty() {
            return Err(AppError::validation("title", "Title must not be empty"));
        }

        repo.find_by_id(param.id)
            .await?
            .filter(|a| a.location_id == location_id)
            .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

        let updated = repo
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

        Ok(updated)
    }

    /// Deletes an announcement within the caller's location.
    pub async fn delete(&self, announcement_id: i32, location_id: i32) -> Result<(), AppError> {
        let repo = AnnouncementRepository::new(self.db);

        repo.find_by_id(announcement_id)
            .await?
            .filter(|a| a.location_id == location_id)
            .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

        repo.delete(announcement_id).await?;

        Ok(())
    }
}
