use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Location, User};
///
/// let test = TestBuilder::new()
///     .with_table(Location)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated from
    /// entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for meal library operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Location
    /// - Tag
    /// - Meal
    /// - MealTag
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_meal_tables(self) -> Self {
        self.with_table(Location)
            .with_table(Tag)
            .with_table(Meal)
            .with_table(MealTag)
    }

    /// Adds all tables required for attendance operations.
    ///
    /// This convenience method adds the meal library tables plus:
    /// - User
    /// - MealDay
    /// - MealDayMeal
    /// - MealDayAttendee
    /// - Guest
    ///
    /// Use this when testing meal day scheduling, attendance, or guest
    /// functionality.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_attendance_tables(self) -> Self {
        self.with_meal_tables()
            .with_table(User)
            .with_table(MealDay)
            .with_table(MealDayMeal)
            .with_table(MealDayAttendee)
            .with_table(Guest)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in insertion order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
