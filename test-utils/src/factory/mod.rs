//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let location = factory::location::create_location(&db).await?;
//!     let user = factory::user::create_user(&db, location.id).await?;
//!
//!     // Create with all dependencies
//!     let (location, user) = factory::helpers::create_user_with_location(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db, location.id)
//!     .email("alice@example.com")
//!     .diet(DietPreference::Vegan)
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod announcement;
pub mod guest;
pub mod helpers;
pub mod location;
pub mod meal;
pub mod meal_day;
pub mod tag;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use announcement::create_announcement;
pub use guest::create_guest;
pub use location::create_location;
pub use meal::create_meal;
pub use meal_day::{create_meal_day, create_meal_day_on};
pub use tag::create_tag;
pub use user::create_user;
