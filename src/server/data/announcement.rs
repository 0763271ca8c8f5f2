//! Announcement data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::announcement::{
    Announcement, CreateAnnouncementParam, UpdateAnnouncementParam,
};

/// Repository providing database operations for location announcements.
pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an announcement.
    pub async fn create(&self, param: CreateAnnouncementParam) -> Result<Announcement, DbErr> {
        let entity = entity::announcement::ActiveModel {
            location_id: ActiveValue::Set(param.location_id),
            created_by: ActiveValue::Set(param.created_by),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    /// Finds an announcement by id.
    pub async fn find_by_id(
        &self,
        announcement_id: i32,
    ) -> Result<Option<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find_by_id(announcement_id)
            .one(self.db)
            .await
    }

    /// Gets a location's announcements, newest first, with pagination.
    ///
    /// # Returns
    /// - `Ok((announcements, total))` - Page of announcements and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        location_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Announcement>, u64), DbErr> {
        let paginator = entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::LocationId.eq(location_id))
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let announcements = entities
            .into_iter()
            .map(Announcement::from_entity)
            .collect();

        Ok((announcements, total))
    }

    /// Updates an announcement's title and body.
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - Updated announcement
    /// - `Ok(None)` - No announcement with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        param: UpdateAnnouncementParam,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(entity) = self.find_by_id(param.id).await? else {
            return Ok(None);
        };

        let mut active: entity::announcement::ActiveModel = entity.into();
        active.title = ActiveValue::Set(param.title);
        active.body = ActiveValue::Set(param.body);

        let updated = active.update(self.db).await?;

        Ok(Some(Announcement::from_entity(updated)))
    }

    /// Deletes an announcement.
    pub async fn delete(&self, announcement_id: i32) -> Result<(), DbErr> {
        entity::prelude::Announcement::delete_by_id(announcement_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
