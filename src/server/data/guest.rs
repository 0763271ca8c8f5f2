//! Guest data repository for database operations.
//!
//! Guests exist only in relation to a meal day: removing them from the day,
//! bulk-clearing a user's guests, or deleting the adding user removes the
//! guest rows outright rather than orphaning them.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::guest::{AddGuestParam, Guest};

/// Repository providing database operations for meal day guests.
pub struct GuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a guest to a meal day on behalf of a user.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The created guest as a domain model
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add(&self, param: AddGuestParam) -> Result<Guest, DbErr> {
        let entity = entity::guest::ActiveModel {
            meal_day_id: ActiveValue::Set(param.meal_day_id),
            added_by: ActiveValue::Set(param.user_id),
            diet: ActiveValue::Set(param.diet),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Guest::from_entity(entity))
    }

    /// Finds a guest by id.
    pub async fn find_by_id(&self, guest_id: i32) -> Result<Option<entity::guest::Model>, DbErr> {
        entity::prelude::Guest::find_by_id(guest_id).one(self.db).await
    }

    /// Gets the guests of a meal day.
    pub async fn for_meal_day(&self, meal_day_id: i32) -> Result<Vec<Guest>, DbErr> {
        let entities = entity::prelude::Guest::find()
            .filter(entity::guest::Column::MealDayId.eq(meal_day_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guest::from_entity).collect())
    }

    /// Deletes a single guest.
    pub async fn delete(&self, guest_id: i32) -> Result<(), DbErr> {
        entity::prelude::Guest::delete_by_id(guest_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Bulk-clears the guests a user added to one meal day.
    ///
    /// # Returns
    /// - `Ok(removed)` - Number of guest rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear_for_user(&self, meal_day_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Guest::delete_many()
            .filter(entity::guest::Column::MealDayId.eq(meal_day_id))
            .filter(entity::guest::Column::AddedBy.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every guest a user ever added, across all meal days.
    ///
    /// Used during account deletion.
    pub async fn delete_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Guest::delete_many()
            .filter(entity::guest::Column::AddedBy.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
