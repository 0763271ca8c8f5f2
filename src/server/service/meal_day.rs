//! Meal day service for business logic.
//!
//! Covers the attendance pipeline: meal day creation with schedules, the
//! range overview joining meals/attendees/guests with per-diet counts, the
//! idempotent attendance toggle, and the weekly bulk form.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        guest::GuestRepository, meal::MealRepository, meal_day::MealDayRepository,
        tag::TagRepository,
    },
    error::AppError,
    model::{
        meal::Meal,
        meal_day::{
            Attendee, CreateMealDayParam, GetOverviewParam, MealDayOverview, MealScheduleParam,
            ScheduledMeal, WeeklyAttendanceParam,
        },
    },
};

/// Service providing business logic for meal days and attendance.
pub struct MealDayService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MealDayService<'a> {
    /// Creates a new MealDayService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meal day with its initial meal schedule.
    ///
    /// Dates are unique per location; scheduling a date twice is a validation
    /// error rather than a 500 from the unique index.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created meal day
    /// - `Err(AppError::Validation)` - Date already scheduled
    /// - `Err(AppError::BadRequest)` - A scheduled meal doesn't exist in this location
    pub async fn create(&self, param: CreateMealDayParam) -> Result<i32, AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);

        if meal_day_repo
            .find_by_date(param.location_id, param.date)
            .await?
            .is_some()
        {
            return Err(AppError::validation(
                "date",
                "A meal day already exists on this date",
            ));
        }

        self.check_meals_in_location(&param.meals, param.location_id)
            .await?;

        let day = meal_day_repo.create(param.location_id, param.date).await?;
        meal_day_repo.set_meals(day.id, &param.meals).await?;

        Ok(day.id)
    }

    /// Replaces the meal schedule of an existing meal day.
    ///
    /// # Returns
    /// - `Ok(())` - Schedule replaced
    /// - `Err(AppError::NotFound)` - Unknown day or day of another location
    /// - `Err(AppError::BadRequest)` - A scheduled meal doesn't exist in this location
    pub async fn replace_meals(
        &self,
        meal_day_id: i32,
        location_id: i32,
        meals: Vec<MealScheduleParam>,
    ) -> Result<(), AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);

        self.find_in_location(&meal_day_repo, meal_day_id, location_id)
            .await?;
        self.check_meals_in_location(&meals, location_id).await?;

        meal_day_repo.set_meals(meal_day_id, &meals).await?;

        Ok(())
    }

    /// Builds the aggregated overview for a date range.
    ///
    /// For every meal day of the caller's location in [from, to]: the
    /// scheduled meals joined with their meal rows and tags, the attendee
    /// list, the guest list, and the flag whether the requesting user
    /// attends. Headcounts and per-diet counts are derived on the domain
    /// model.
    ///
    /// # Returns
    /// - `Ok(Vec<MealDayOverview>)` - One overview per day, ordered by date
    /// - `Err(AppError::DbErr)` - Database error during any of the lookups
    pub async fn get_overview(
        &self,
        param: GetOverviewParam,
    ) -> Result<Vec<MealDayOverview>, AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);
        let guest_repo = GuestRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);

        let days = meal_day_repo
            .get_range(param.location_id, param.from, param.to)
            .await?;

        let mut overviews = Vec::with_capacity(days.len());
        for day in days {
            let mut meals = Vec::new();
            for (schedule, meal) in meal_day_repo.scheduled_meals(day.id).await? {
                // A schedule row without its meal row means the meal was
                // deleted mid-request; skip rather than fail the overview.
                let Some(meal) = meal else {
                    continue;
                };

                let tags = tag_repo.names_for_meal(meal.id).await?;
                meals.push(ScheduledMeal {
                    meal: Meal::from_entity(meal, tags),
                    start_time: schedule.start_time,
                    end_time: schedule.end_time,
                });
            }

            let attendees: Vec<Attendee> = meal_day_repo
                .attendees(day.id)
                .await?
                .into_iter()
                .map(|u| Attendee {
                    user_id: u.id,
                    name: u.name,
                    diet: u.diet,
                })
                .collect();

            let guests = guest_repo.for_meal_day(day.id).await?;

            let attending = attendees.iter().any(|a| a.user_id == param.user_id);

            overviews.push(MealDayOverview {
                id: day.id,
                date: day.date,
                meals,
                attendees,
                guests,
                attending,
            });
        }

        Ok(overviews)
    }

    /// Sets the requesting user's attendance for one meal day.
    ///
    /// Idempotent in both directions: attending twice or withdrawing twice is
    /// a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Attendance recorded or removed
    /// - `Err(AppError::NotFound)` - Unknown day or day of another location
    pub async fn set_attendance(
        &self,
        meal_day_id: i32,
        location_id: i32,
        user_id: i32,
        attending: bool,
    ) -> Result<(), AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);

        self.find_in_location(&meal_day_repo, meal_day_id, location_id)
            .await?;

        if attending {
            meal_day_repo.add_attendee(meal_day_id, user_id).await?;
        } else {
            meal_day_repo.remove_attendee(meal_day_id, user_id).await?;
        }

        Ok(())
    }

    /// Applies a weekly attendance form in one request.
    ///
    /// Days without a meal day are skipped silently; the form may span dates
    /// the kitchen hasn't scheduled yet.
    ///
    /// # Returns
    /// - `Ok(applied)` - Number of days whose attendance was updated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_week_attendance(
        &self,
        param: WeeklyAttendanceParam,
    ) -> Result<u64, AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);

        let mut applied = 0;
        for (date, attending) in &param.days {
            let Some(day) = meal_day_repo.find_by_date(param.location_id, *date).await? else {
                continue;
            };

            if *attending {
                meal_day_repo.add_attendee(day.id, param.user_id).await?;
            } else {
                meal_day_repo.remove_attendee(day.id, param.user_id).await?;
            }
            applied += 1;
        }

        Ok(applied)
    }

    /// Deletes a meal day with its schedule, attendees, and guests.
    ///
    /// # Returns
    /// - `Ok(())` - Meal day deleted
    /// - `Err(AppError::NotFound)` - Unknown day or day of another location
    pub async fn delete(&self, meal_day_id: i32, location_id: i32) -> Result<(), AppError> {
        let meal_day_repo = MealDayRepository::new(self.db);

        self.find_in_location(&meal_day_repo, meal_day_id, location_id)
            .await?;

        meal_day_repo.delete(meal_day_id).await?;

        Ok(())
    }

    /// Looks up a meal day and enforces the location boundary.
    async fn find_in_location(
        &self,
        meal_day_repo: &MealDayRepository<'_>,
        meal_day_id: i32,
        location_id: i32,
    ) -> Result<entity::meal_day::Model, AppError> {
        let day = meal_day_repo
            .find_by_id(meal_day_id)
            .await?
            .filter(|d| d.location_id == location_id)
            .ok_or_else(|| AppError::NotFound("Meal day not found".to_string()))?;

        Ok(day)
    }

    /// Verifies every scheduled meal exists within the location.
    async fn check_meals_in_location(
        &self,
        meals: &[MealScheduleParam],
        location_id: i32,
    ) -> Result<(), AppError> {
        let meal_repo = MealRepository::new(self.db);

        for schedule in meals {
            let found = meal_repo
                .find_by_id(schedule.meal_id)
                .await?
                .filter(|m| m.location_id == location_id);

            if found.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Meal {} does not exist in this location",
                    schedule.meal_id
                )));
            }
        }

        Ok(())
    }
}
