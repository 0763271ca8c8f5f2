//! Guest service for business logic.
//!
//! Guests are tracked only by dietary preference and the user who brings
//! them. Removal deletes the row outright; there is no soft-delete or orphan
//! state.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guest::GuestRepository, meal_day::MealDayRepository},
    error::{auth::AuthError, AppError},
    model::guest::{AddGuestParam, Guest},
};

/// Service providing business logic for meal day guests.
pub struct GuestService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    /// Creates a new GuestService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a guest to a meal day on behalf of a user.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The created guest
    /// - `Err(AppError::NotFound)` - Unknown day or day of another location
    pub async fn add(&self, param: AddGuestParam, location_id: i32) -> Result<Guest, AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);
        let guest_repo = GuestRepository::new(self.db);

        meal_day_repo
            .find_by_id(param.meal_day_id)
            .await?
            .filter(|d| d.location_id == location_id)
            .ok_or_else(|| AppError::NotFound("Meal day not found".to_string()))?;

        let guest = guest_repo.add(param).await?;

        Ok(guest)
    }

    /// Removes a single guest.
    ///
    /// Users may remove their own guests; admins may remove anyone's.
    ///
    /// # Returns
    /// - `Ok(())` - Guest deleted
    /// - `Err(AppError::NotFound)` - Unknown guest
    /// - `Err(AppError::AuthErr(AccessDenied))` - Guest belongs to someone else
    pub async fn remove(
        &self,
        guest_id: i32,
        user_id: i32,
        is_admin: bool,
    ) -> Result<(), AppError> {
        let guest_repo = GuestRepository::new(self.db);

        let Some(guest) = guest_repo.find_by_id(guest_id).await? else {
            return Err(AppError::NotFound("Guest not found".to_string()));
        };

        if guest.added_by != user_id && !is_admin {
            return Err(AuthError::AccessDenied(
                user_id,
                "attempted to remove another user's guest".to_string(),
            )
            .into());
        }

        guest_repo.delete(guest_id).await?;

        Ok(())
    }

    /// Bulk-clears the guests a user added to one meal day.
    ///
    /// # Returns
    /// - `Ok(removed)` - Number of guests deleted
    /// - `Err(AppError::NotFound)` - Unknown day or day of another location
    pub async fn clear_own(
        &self,
        meal_day_id: i32,
        location_id: i32,
        user_id: i32,
    ) -> Result<u64, AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);
        let guest_repo = GuestRepository::new(self.db);

        meal_day_repo
            .find_by_id(meal_day_id)
            .await?
            .filter(|d| d.location_id == location_id)
            .ok_or_else(|| AppError::NotFound("Meal day not found".to_string()))?;

        let removed = guest_repo.clear_for_user(meal_day_id, user_id).await?;

        Ok(removed)
    }
}
