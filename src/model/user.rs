use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Dietary preference, lowercase.
    pub diet: String,
    /// Birthday as YYYY-MM-DD.
    pub birthday: Option<String>,
    pub image_url: Option<String>,
    pub admin: bool,
    pub location_id: i32,
}

/// Profile update form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: String,
    pub diet: String,
    pub birthday: Option<String>,
}

/// Admin flag update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetAdminDto {
    pub admin: bool,
}

/// Paginated collection of users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
