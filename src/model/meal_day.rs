use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::model::meal::MealDto;

/// A meal scheduled on a meal day with serving times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduledMealDto {
    pub meal: MealDto,
    /// Serving start as HH:MM.
    pub start_time: String,
    /// Serving end as HH:MM.
    pub end_time: String,
}

/// Meal schedule entry in a create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleMealDto {
    pub meal_id: i32,
    /// Serving start as HH:MM.
    pub start_time: String,
    /// Serving end as HH:MM.
    pub end_time: String,
}

/// Meal day creation form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMealDayDto {
    /// Calendar date as YYYY-MM-DD.
    pub date: String,
    #[serde(default)]
    pub meals: Vec<ScheduleMealDto>,
}

/// Replacement meal schedule for an existing meal day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateMealDayMealsDto {
    pub meals: Vec<ScheduleMealDto>,
}

/// Attendee entry in a meal day overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendeeDto {
    pub user_id: i32,
    pub name: String,
    /// Dietary preference, lowercase.
    pub diet: String,
}

/// Guest entry in a meal day overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverviewGuestDto {
    pub id: i32,
    /// User who brings the guest.
    pub added_by: i32,
    /// Dietary preference, lowercase.
    pub diet: String,
}

/// Aggregated view of one meal day.
///
/// Joins the scheduled meals, the attending users, and the guests, and
/// carries the derived totals: overall headcount and per-diet counts across
/// attendees and guests combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealDayOverviewDto {
    pub id: i32,
    /// Calendar date as YYYY-MM-DD.
    pub date: String,
    pub meals: Vec<ScheduledMealDto>,
    pub attendees: Vec<AttendeeDto>,
    pub guests: Vec<OverviewGuestDto>,
    /// Attendees plus guests.
    pub total_count: u64,
    /// Headcount per lowercase diet name, attendees and guests combined.
    pub diet_counts: HashMap<String, u64>,
    /// Whether the requesting user attends this day.
    pub attending: bool,
}

/// One day in a weekly attendance form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DayAttendanceDto {
    /// Calendar date as YYYY-MM-DD.
    pub date: String,
    pub attending: bool,
}

/// Weekly attendance form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeeklyAttendanceDto {
    pub days: Vec<DayAttendanceDto>,
}
