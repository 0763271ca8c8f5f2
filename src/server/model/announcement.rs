//! Announcement domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::announcement::{AnnouncementDto, PaginatedAnnouncementsDto};

/// Announcement posted by a location admin.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub location_id: i32,
    pub created_by: i32,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            location_id: entity.location_id,
            created_by: entity.created_by,
            title: entity.title,
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            body: self.body,
            created_by: self.created_by,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Parameters for posting an announcement.
#[derive(Debug, Clone)]
pub struct CreateAnnouncementParam {
    pub location_id: i32,
    pub created_by: i32,
    pub title: String,
    pub body: String,
}

/// Parameters for editing an announcement.
#[derive(Debug, Clone)]
pub struct UpdateAnnouncementParam {
    pub id: i32,
    pub title: String,
    pub body: String,
}

/// Paginated collection of announcements with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAnnouncements {
    pub announcements: Vec<Announcement>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAnnouncements {
    pub fn into_dto(self) -> PaginatedAnnouncementsDto {
        PaginatedAnnouncementsDto {
            announcements: self
                .announcements
                .into_iter()
                .map(|a| a.into_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
