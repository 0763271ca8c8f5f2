use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Announcement as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    /// Admin who posted the announcement.
    pub created_by: i32,
    /// Posting time, RFC 3339.
    pub created_at: String,
}

/// Announcement creation form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAnnouncementDto {
    pub title: String,
    pub body: String,
}

/// Announcement update form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAnnouncementDto {
    pub title: String,
    pub body: String,
}

/// Paginated collection of announcements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAnnouncementsDto {
    pub announcements: Vec<AnnouncementDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
