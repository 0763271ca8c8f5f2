//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::types::DietPreference;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder Argon2id hash stored for factory users.
///
/// Repository and aggregation tests never verify passwords; auth service tests
/// create their own hashes.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$dGVzdGhhc2g";

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, location.id)
///     .email("alice@example.com")
///     .diet(DietPreference::Vegan)
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    name: String,
    email: String,
    password_hash: String,
    diet: DietPreference,
    birthday: Option<NaiveDate>,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - diet: `Omnivore`
    /// - birthday: `None`
    /// - admin: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `location_id` - Location the user belongs to
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            location_id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: DUMMY_HASH.to_string(),
            diet: DietPreference::Omnivore,
            birthday: None,
            admin: false,
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unique email address for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash for the user.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self
    }

    /// Sets the dietary preference for the user.
    pub fn diet(mut self, diet: DietPreference) -> Self {
        self.diet = diet;
        self
    }

    /// Sets the birthday for the user.
    pub fn birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Sets the admin status for the user.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            location_id: ActiveValue::Set(self.location_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            diet: ActiveValue::Set(self.diet),
            birthday: ActiveValue::Set(self.birthday),
            image_url: ActiveValue::Set(None),
            admin: ActiveValue::Set(self.admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values in the given location.
///
/// Shorthand for `UserFactory::new(db, location_id).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, location_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::location::create_location;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Location)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let location = create_location(db).await?;
        let user = create_user(db, location.id).await?;

        assert_eq!(user.location_id, location.id);
        assert!(!user.admin);
        assert_eq!(user.diet, DietPreference::Omnivore);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Location)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let location = create_location(db).await?;
        let user = UserFactory::new(db, location.id)
            .email("alice@example.com")
            .name("Alice")
            .diet(DietPreference::Vegan)
            .admin(true)
            .build()
            .await?;

        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.diet, DietPreference::Vegan);
        assert!(user.admin);

        Ok(())
    }
}
