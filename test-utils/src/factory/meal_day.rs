//! Meal day factory for creating test meal day entities.

use crate::factory::helpers::next_id;
use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test meal days with customizable fields.
///
/// Each factory-created meal day defaults to a distinct future date so that
/// the per-location uniqueness of dates never trips tests that create
/// several days in a row.
pub struct MealDayFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    date: NaiveDate,
}

impl<'a> MealDayFactory<'a> {
    /// Creates a new MealDayFactory with default values.
    ///
    /// Defaults:
    /// - date: today plus a unique per-factory offset in days
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `location_id` - Location the meal day belongs to
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        let offset = next_id();
        Self {
            db,
            location_id,
            date: Utc::now()
                .date_naive()
                .checked_add_days(Days::new(offset))
                .unwrap_or_else(|| Utc::now().date_naive()),
        }
    }

    /// Sets the calendar date for the meal day.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the meal day entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::meal_day::Model)` - Created meal day entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::meal_day::Model, DbErr> {
        entity::meal_day::ActiveModel {
            location_id: ActiveValue::Set(self.location_id),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a meal day with a unique future date in the given location.
pub async fn create_meal_day(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::meal_day::Model, DbErr> {
    MealDayFactory::new(db, location_id).build().await
}

/// Creates a meal day on a specific date in the given location.
pub async fn create_meal_day_on(
    db: &DatabaseConnection,
    location_id: i32,
    date: NaiveDate,
) -> Result<entity::meal_day::Model, DbErr> {
    MealDayFactory::new(db, location_id).date(date).build().await
}
