//! Guest factory for creating test guest entities.

use entity::types::DietPreference;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guests with customizable fields.
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    meal_day_id: i32,
    added_by: i32,
    diet: DietPreference,
}

impl<'a> GuestFactory<'a> {
    /// Creates a new GuestFactory with default values.
    ///
    /// Defaults:
    /// - diet: `Omnivore`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `meal_day_id` - Meal day the guest is attending
    /// - `added_by` - User who brings the guest
    pub fn new(db: &'a DatabaseConnection, meal_day_id: i32, added_by: i32) -> Self {
        Self {
            db,
            meal_day_id,
            added_by,
            diet: DietPreference::Omnivore,
        }
    }

    /// Sets the dietary preference for the guest.
    pub fn diet(mut self, diet: DietPreference) -> Self {
        self.diet = diet;
        self
    }

    /// Builds and inserts the guest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guest::Model)` - Created guest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            meal_day_id: ActiveValue::Set(self.meal_day_id),
            added_by: ActiveValue::Set(self.added_by),
            diet: ActiveValue::Set(self.diet),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest with default values for the given meal day and user.
pub async fn create_guest(
    db: &DatabaseConnection,
    meal_day_id: i32,
    added_by: i32,
) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db, meal_day_id, added_by).build().await
}
