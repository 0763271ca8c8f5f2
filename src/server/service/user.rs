//! User service for business logic.
//!
//! This module provides the `UserService` for managing user-related business logic:
//! profile updates, profile image uploads, admin management, and account deletion
//! with its cleanup of attendance and guest records.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guest::GuestRepository, meal_day::MealDayRepository, user::UserRepository},
    error::AppError,
    model::user::{
        GetAllUsersParam, PaginatedUsers, SetAdminParam, UpdateProfileParam, User,
    },
    service::{mail::MailClient, storage::StorageClient},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users of a location with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total_items) = user_repo
            .get_all_paginated(param.location_id, param.page, param.per_page)
            .await?;

        let total_pages = (total_items as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Updates a user's own profile.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let updated = user_repo
            .update_profile(param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated)
    }

    /// Uploads a profile image and stores its public URL on the user.
    ///
    /// The image lands in the object storage bucket under a per-user key, so
    /// re-uploading replaces the previous object.
    ///
    /// # Arguments
    /// - `storage` - Object storage client
    /// - `user_id` - User uploading the image
    /// - `data` - Raw image bytes from the multipart upload
    /// - `content_type` - MIME type reported by the client
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored image
    /// - `Err(AppError)` - Storage upload or database error
    pub async fn upload_profile_image(
        &self,
        storage: &StorageClient,
        user_id: i32,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let key = format!("profiles/{}", user_id);
        let url = storage.upload(&key, data, content_type).await?;

        user_repo.set_image(user_id, url.clone()).await?;

        Ok(url)
    }

    /// Grants or revokes admin privileges for a user.
    ///
    /// Verifies the user exists in the database before setting their admin status.
    ///
    /// # Returns
    /// - `Ok(())` - Admin status successfully changed
    /// - `Err(AppError::NotFound)` - User with specified id does not exist
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn set_admin(&self, param: SetAdminParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        // Verify user exists
        let user = user_repo.find_by_id(param.user_id).await?;
        if user.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        user_repo.set_admin(param.user_id, param.admin).await?;

        Ok(())
    }

    /// Deletes a user account with all attendance and guest records.
    ///
    /// Removes the user's attendance rows across all meal days, every guest
    /// they ever added, and finally the user row. A goodbye email goes out
    /// afterwards; mail failures are logged but don't undo the deletion.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error during cleanup
    pub async fn delete_account(&self, mail: &MailClient, user_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let meal_day_repo = MealDayRepository::new(self.db);
        let guest_repo = GuestRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        meal_day_repo.remove_all_attendance(user_id).await?;
        guest_repo.delete_all_for_user(user_id).await?;
        user_repo.delete(user_id).await?;

        if let Err(e) = mail.send_account_deleted(&user.email, &user.name).await {
            tracing::warn!("Failed to send deletion email to {}: {}", user.email, e);
        }

        Ok(())
    }
}
