//! Meal day data repository for database operations.
//!
//! A meal day is one calendar date within a location, carrying a schedule of
//! meals with serving times and the list of attending users. Attendance is
//! idempotent: the composite primary key on (meal_day_id, user_id) plus the
//! existence check here keep the attendee list deduplicated per user.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::meal_day::MealScheduleParam;

/// Repository providing database operations for meal days and attendance.
pub struct MealDayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MealDayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meal day for a date within a location.
    ///
    /// The unique index on (location_id, date) rejects a second day on the
    /// same date; services check beforehand to turn that into a validation
    /// error instead of a 500.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created meal day entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate date)
    pub async fn create(
        &self,
        location_id: i32,
        date: NaiveDate,
    ) -> Result<entity::meal_day::Model, DbErr> {
        entity::meal_day::ActiveModel {
            location_id: ActiveValue::Set(location_id),
            date: ActiveValue::Set(date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a meal day by id.
    pub async fn find_by_id(
        &self,
        meal_day_id: i32,
    ) -> Result<Option<entity::meal_day::Model>, DbErr> {
        entity::prelude::MealDay::find_by_id(meal_day_id)
            .one(self.db)
            .await
    }

    /// Finds a meal day by date within a location.
    pub async fn find_by_date(
        &self,
        location_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::meal_day::Model>, DbErr> {
        entity::prelude::MealDay::find()
            .filter(entity::meal_day::Column::LocationId.eq(location_id))
            .filter(entity::meal_day::Column::Date.eq(date))
            .one(self.db)
            .await
    }

    /// Gets the meal days of a location within a date range, ordered by date.
    ///
    /// Both bounds are inclusive.
    pub async fn get_range(
        &self,
        location_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<entity::meal_day::Model>, DbErr> {
        entity::prelude::MealDay::find()
            .filter(entity::meal_day::Column::LocationId.eq(location_id))
            .filter(entity::meal_day::Column::Date.gte(from))
            .filter(entity::meal_day::Column::Date.lte(to))
            .order_by_asc(entity::meal_day::Column::Date)
            .all(self.db)
            .await
    }

    /// Replaces the scheduled meal list of a meal day.
    ///
    /// Existing entries are dropped and the new list inserted in order. A meal
    /// appearing twice in the input collapses to its first entry via the
    /// composite primary key check.
    pub async fn set_meals(
        &self,
        meal_day_id: i32,
        meals: &[MealScheduleParam],
    ) -> Result<(), DbErr> {
        entity::prelude::MealDayMeal::delete_many()
            .filter(entity::meal_day_meal::Column::MealDayId.eq(meal_day_id))
            .exec(self.db)
            .await?;

        let mut seen = Vec::new();
        for meal in meals {
            if seen.contains(&meal.meal_id) {
                continue;
            }
            seen.push(meal.meal_id);

            entity::meal_day_meal::ActiveModel {
                meal_day_id: ActiveValue::Set(meal_day_id),
                meal_id: ActiveValue::Set(meal.meal_id),
                start_time: ActiveValue::Set(meal.start_time),
                end_time: ActiveValue::Set(meal.end_time),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Gets the scheduled meals of a meal day with their meal rows.
    ///
    /// Entries are ordered by serving start time.
    pub async fn scheduled_meals(
        &self,
        meal_day_id: i32,
    ) -> Result<Vec<(entity::meal_day_meal::Model, Option<entity::meal::Model>)>, DbErr> {
        entity::prelude::MealDayMeal::find()
            .filter(entity::meal_day_meal::Column::MealDayId.eq(meal_day_id))
            .order_by_asc(entity::meal_day_meal::Column::StartTime)
            .find_also_related(entity::prelude::Meal)
            .all(self.db)
            .await
    }

    /// Marks a user as attending a meal day.
    ///
    /// Idempotent: attending an already-attended day is a no-op, keeping the
    /// attendee list deduplicated by user id.
    ///
    /// # Returns
    /// - `Ok(true)` - Attendance was recorded
    /// - `Ok(false)` - User was already attending
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add_attendee(&self, meal_day_id: i32, user_id: i32) -> Result<bool, DbErr> {
        if self.is_attending(meal_day_id, user_id).await? {
            return Ok(false);
        }

        entity::meal_day_attendee::ActiveModel {
            meal_day_id: ActiveValue::Set(meal_day_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a user from a meal day's attendee list.
    ///
    /// Idempotent: removing a non-attending user is a no-op.
    pub async fn remove_attendee(&self, meal_day_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::MealDayAttendee::delete_many()
            .filter(entity::meal_day_attendee::Column::MealDayId.eq(meal_day_id))
            .filter(entity::meal_day_attendee::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Checks whether a user attends a meal day.
    pub async fn is_attending(&self, meal_day_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::MealDayAttendee::find_by_id((meal_day_id, user_id))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Gets the users attending a meal day, ordered by name.
    pub async fn attendees(&self, meal_day_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .join(
                JoinType::InnerJoin,
                entity::user::Relation::MealDayAttendee.def(),
            )
            .filter(entity::meal_day_attendee::Column::MealDayId.eq(meal_day_id))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await
    }

    /// Removes every attendance row of a user across all meal days.
    ///
    /// Used during account deletion.
    pub async fn remove_all_attendance(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::MealDayAttendee::delete_many()
            .filter(entity::meal_day_attendee::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a meal day with its schedule, attendees, and guests.
    pub async fn delete(&self, meal_day_id: i32) -> Result<(), DbErr> {
        entity::prelude::MealDayMeal::delete_many()
            .filter(entity::meal_day_meal::Column::MealDayId.eq(meal_day_id))
            .exec(self.db)
            .await?;

        entity::prelude::MealDayAttendee::delete_many()
            .filter(entity::meal_day_attendee::Column::MealDayId.eq(meal_day_id))
            .exec(self.db)
            .await?;

        entity::prelude::Guest::delete_many()
            .filter(entity::guest::Column::MealDayId.eq(meal_day_id))
            .exec(self.db)
            .await?;

        entity::prelude::MealDay::delete_by_id(meal_day_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
