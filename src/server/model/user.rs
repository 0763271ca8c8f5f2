//! User domain models and parameters.

use chrono::NaiveDate;
use entity::types::DietPreference;

use crate::model::user::{PaginatedUsersDto, UserDto};

/// Application user with identity, diet, and permission data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub location_id: i32,
    pub name: String,
    pub email: String,
    pub diet: DietPreference,
    pub birthday: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub admin: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored password hash deliberately stays behind in the entity; nothing
    /// above the data layer ever needs it.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            location_id: entity.location_id,
            name: entity.name,
            email: entity.email,
            diet: entity.diet,
            birthday: entity.birthday,
            image_url: entity.image_url,
            admin: entity.admin,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            diet: self.diet.as_str().to_string(),
            birthday: self.birthday.map(|b| b.format("%Y-%m-%d").to_string()),
            image_url: self.image_url,
            admin: self.admin,
            location_id: self.location_id,
        }
    }
}

/// Parameters for creating a user during registration.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub location_id: i32,
    pub name: String,
    pub email: String,
    /// Argon2id hash of the chosen password.
    pub password_hash: String,
    pub diet: DietPreference,
    pub birthday: Option<NaiveDate>,
    /// First user of a freshly founded location becomes its admin.
    pub admin: bool,
}

/// Parameters for updating a user's own profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub user_id: i32,
    pub name: String,
    pub diet: DietPreference,
    pub birthday: Option<NaiveDate>,
}

/// Parameters for paginated user queries within a location.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    pub location_id: i32,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Parameters for setting user admin status.
#[derive(Debug, Clone)]
pub struct SetAdminParam {
    pub user_id: i32,
    pub admin: bool,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
