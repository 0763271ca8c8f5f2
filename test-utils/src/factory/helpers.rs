//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a location and a user belonging to it.
///
/// Convenience method for tests that need an authenticated user without
/// caring about the surrounding workspace.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((location, user))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_location(
    db: &DatabaseConnection,
) -> Result<(entity::location::Model, entity::user::Model), DbErr> {
    let location = crate::factory::location::create_location(db).await?;
    let user = crate::factory::user::create_user(db, location.id).await?;

    Ok((location, user))
}

/// Creates a full attendance fixture: location, user, and a meal day.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((location, user, meal_day))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_meal_day_with_user(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::location::Model,
        entity::user::Model,
        entity::meal_day::Model,
    ),
    DbErr,
> {
    let location = crate::factory::location::create_location(db).await?;
    let user = crate::factory::user::create_user(db, location.id).await?;
    let meal_day = crate::factory::meal_day::create_meal_day(db, location.id).await?;

    Ok((location, user, meal_day))
}
