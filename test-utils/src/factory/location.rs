//! Location factory for creating test workspace entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
///
/// Provides a builder pattern for creating location entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::location::LocationFactory;
///
/// let location = LocationFactory::new(&db)
///     .name("Head Office")
///     .code("HQ0001")
///     .build()
///     .await?;
/// ```
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Location {id}"` where id is auto-incremented
    /// - code: `"LOC{id:04}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LocationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Location {}", id),
            code: format!("LOC{:04}", id),
        }
    }

    /// Sets the unique human-entered name for the location.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unique short code for the location.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::location::Model)` - Created location entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
///
/// Shorthand for `LocationFactory::new(db).build().await`.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_unique_locations() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Location)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_location(db).await?;
        let second = create_location(db).await?;

        assert_ne!(first.name, second.name);
        assert_ne!(first.code, second.code);

        Ok(())
    }
}
