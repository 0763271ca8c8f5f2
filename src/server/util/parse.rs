//! Parsing helpers for form field values.
//!
//! All parsers return `AppError::Validation` carrying the field name so
//! controllers can surface the message next to the offending form input.

use chrono::{NaiveDate, NaiveTime};
use entity::types::{Allergen, DietPreference, Season};

use crate::server::error::AppError;

/// Parses a `YYYY-MM-DD` form value into a date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::validation(field, "Expected a date formatted as YYYY-MM-DD"))
}

/// Parses an `HH:MM` form value into a time of day.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::validation(field, "Expected a time formatted as HH:MM"))
}

/// Parses a lowercase diet name into a dietary preference.
pub fn parse_diet(field: &str, value: &str) -> Result<DietPreference, AppError> {
    DietPreference::parse(value)
        .ok_or_else(|| AppError::validation(field, "Unknown dietary preference"))
}

/// Parses a list of lowercase allergen names.
pub fn parse_allergens(field: &str, values: &[String]) -> Result<Vec<Allergen>, AppError> {
    values
        .iter()
        .map(|v| {
            Allergen::parse(v).ok_or_else(|| AppError::validation(field, "Unknown allergy tag"))
        })
        .collect()
}

/// Parses a list of lowercase season names.
pub fn parse_seasons(field: &str, values: &[String]) -> Result<Vec<Season>, AppError> {
    values
        .iter()
        .map(|v| Season::parse(v).ok_or_else(|| AppError::validation(field, "Unknown season tag")))
        .collect()
}
