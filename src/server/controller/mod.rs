//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert DTOs into
//! parameter models, call into the service layer, and convert domain models
//! back into DTOs for the response. Each handler carries its OpenAPI path
//! annotation.

pub mod announcement;
pub mod auth;
pub mod guest;
pub mod location;
pub mod meal;
pub mod meal_day;
pub mod param;
pub mod user;
