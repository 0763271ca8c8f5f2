//! API data transfer objects.
//!
//! Serde/utoipa types exchanged with clients. Conversion to and from domain
//! models happens at the controller boundary.

pub mod ai;
pub mod announcement;
pub mod api;
pub mod auth;
pub mod guest;
pub mod location;
pub mod meal;
pub mod meal_day;
pub mod user;
