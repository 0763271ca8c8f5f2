//! Domain models and operation parameter types.
//!
//! These types sit between the API DTOs and the database entities. Repositories
//! convert entities into domain models at the infrastructure boundary; controllers
//! convert DTOs into parameter models before calling services.

pub mod announcement;
pub mod guest;
pub mod location;
pub mod meal;
pub mod meal_day;
pub mod user;
