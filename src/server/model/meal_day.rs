//! Meal day domain models and parameters.
//!
//! The central aggregation type here is `MealDayOverview`, the joined view of
//! one calendar day: its scheduled meals, attending users, guests, and the
//! derived per-diet headcounts.

use chrono::{NaiveDate, NaiveTime};
use entity::types::DietPreference;
use std::collections::HashMap;

use crate::{
    model::meal_day::{
        AttendeeDto, MealDayOverviewDto, OverviewGuestDto, ScheduledMealDto,
    },
    server::model::{guest::Guest, meal::Meal},
};

/// A meal scheduled on a meal day with its serving window.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledMeal {
    pub meal: Meal,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl ScheduledMeal {
    pub fn into_dto(self) -> ScheduledMealDto {
        ScheduledMealDto {
            meal: self.meal.into_dto(),
            start_time: self.start_time.format("%H:%M").to_string(),
            end_time: self.end_time.format("%H:%M").to_string(),
        }
    }
}

/// A user attending a meal day.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendee {
    pub user_id: i32,
    pub name: String,
    pub diet: DietPreference,
}

impl Attendee {
    pub fn into_dto(self) -> AttendeeDto {
        AttendeeDto {
            user_id: self.user_id,
            name: self.name,
            diet: self.diet.as_str().to_string(),
        }
    }
}

/// Aggregated view of one meal day.
#[derive(Debug, Clone, PartialEq)]
pub struct MealDayOverview {
    pub id: i32,
    pub date: NaiveDate,
    pub meals: Vec<ScheduledMeal>,
    pub attendees: Vec<Attendee>,
    pub guests: Vec<Guest>,
    /// Whether the requesting user attends this day.
    pub attending: bool,
}

impl MealDayOverview {
    /// Headcount of attendees plus guests.
    pub fn total_count(&self) -> u64 {
        (self.attendees.len() + self.guests.len()) as u64
    }

    /// Merges attendee diets and guest diets into per-diet headcounts.
    pub fn diet_counts(&self) -> HashMap<DietPreference, u64> {
        let mut counts: HashMap<DietPreference, u64> = HashMap::new();

        for attendee in &self.attendees {
            *counts.entry(attendee.diet).or_insert(0) += 1;
        }
        for guest in &self.guests {
            *counts.entry(guest.diet).or_insert(0) += 1;
        }

        counts
    }

    pub fn into_dto(self) -> MealDayOverviewDto {
        let total_count = self.total_count();
        let diet_counts = self
            .diet_counts()
            .into_iter()
            .map(|(diet, count)| (diet.as_str().to_string(), count))
            .collect();

        MealDayOverviewDto {
            id: self.id,
            date: self.date.format("%Y-%m-%d").to_string(),
            meals: self.meals.into_iter().map(|m| m.into_dto()).collect(),
            attendees: self.attendees.into_iter().map(|a| a.into_dto()).collect(),
            guests: self
                .guests
                .into_iter()
                .map(|g| OverviewGuestDto {
                    id: g.id,
                    added_by: g.added_by,
                    diet: g.diet.as_str().to_string(),
                })
                .collect(),
            total_count,
            diet_counts,
            attending: self.attending,
        }
    }
}

/// One scheduled meal entry in a create/replace operation.
#[derive(Debug, Clone)]
pub struct MealScheduleParam {
    pub meal_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Parameters for creating a meal day.
#[derive(Debug, Clone)]
pub struct CreateMealDayParam {
    pub location_id: i32,
    pub date: NaiveDate,
    pub meals: Vec<MealScheduleParam>,
}

/// Parameters for the meal day range overview.
#[derive(Debug, Clone)]
pub struct GetOverviewParam {
    pub location_id: i32,
    /// Requesting user, used to flag their own attendance.
    pub user_id: i32,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Parameters for the weekly bulk attendance form.
#[derive(Debug, Clone)]
pub struct WeeklyAttendanceParam {
    pub location_id: i32,
    pub user_id: i32,
    /// Date and desired attendance, one entry per day of the form.
    pub days: Vec<(NaiveDate, bool)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview_with(attendee_diets: &[DietPreference], guest_diets: &[DietPreference]) -> MealDayOverview {
        MealDayOverview {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            meals: Vec::new(),
            attendees: attendee_diets
                .iter()
                .enumerate()
                .map(|(i, diet)| Attendee {
                    user_id: i as i32 + 1,
                    name: format!("User {}", i + 1),
                    diet: *diet,
                })
                .collect(),
            guests: guest_diets
                .iter()
                .enumerate()
                .map(|(i, diet)| Guest {
                    id: i as i32 + 1,
                    meal_day_id: 1,
                    added_by: 1,
                    diet: *diet,
                })
                .collect(),
            attending: false,
        }
    }

    #[test]
    fn counts_attendees_and_guests_together() {
        let overview = overview_with(
            &[DietPreference::Omnivore, DietPreference::Vegan],
            &[DietPreference::Vegan],
        );

        assert_eq!(overview.total_count(), 3);

        let counts = overview.diet_counts();
        assert_eq!(counts.get(&DietPreference::Omnivore), Some(&1));
        assert_eq!(counts.get(&DietPreference::Vegan), Some(&2));
        assert_eq!(counts.get(&DietPreference::Vegetarian), None);
    }

    #[test]
    fn empty_day_has_no_counts() {
        let overview = overview_with(&[], &[]);

        assert_eq!(overview.total_count(), 0);
        assert!(overview.diet_counts().is_empty());
    }

    #[test]
    fn dto_conversion_uses_lowercase_diet_keys() {
        let overview = overview_with(&[DietPreference::Pescatarian], &[]);
        let dto = overview.into_dto();

        assert_eq!(dto.date, "2025-03-10");
        assert_eq!(dto.diet_counts.get("pescatarian"), Some(&1));
        assert_eq!(dto.total_count, 1);
    }
}
