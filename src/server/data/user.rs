//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, profile updates, queries, admin status management, and
//! account deletion with proper conversion between entity models and domain models at
//! the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateProfileParam, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from registration parameters.
    ///
    /// The password arrives pre-hashed; this method never sees plaintext
    /// credentials.
    ///
    /// # Arguments
    /// - `param` - User creation parameters including location, identity, and diet
    ///
    /// # Returns
    /// - `Ok(User)` - The created user as a domain model
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate email)
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            location_id: ActiveValue::Set(param.location_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            diet: ActiveValue::Set(param.diet),
            birthday: ActiveValue::Set(param.birthday),
            image_url: ActiveValue::Set(None),
            admin: ActiveValue::Set(param.admin),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user entity by id.
    ///
    /// Returns the raw entity model because callers at this level (auth guard,
    /// services) need fields the domain model hides, like the admin flag next
    /// to the location id.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user entity by email address.
    ///
    /// Used during login and password reset; returns the entity model because
    /// the credential check needs the stored password hash.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email address is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates a user's own profile fields.
    ///
    /// # Arguments
    /// - `param` - New name, diet, and birthday for the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user as a domain model
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        param: UpdateProfileParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = self.find_by_id(param.user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.diet = ActiveValue::Set(param.diet);
        active.birthday = ActiveValue::Set(param.birthday);

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Sets the profile image URL for a user.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the user
    /// - `image_url` - Public URL of the uploaded image
    pub async fn set_image(&self, user_id: i32, image_url: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::ImageUrl,
                sea_orm::sea_query::Expr::value(Some(image_url)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the stored password hash for a user.
    ///
    /// Called after a successful password reset.
    pub async fn set_password_hash(&self, user_id: i32, hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(hash),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets admin status for a user.
    ///
    /// Updates the admin column for the specified user to grant or revoke admin
    /// privileges. Used by admin management endpoints to control which users have
    /// elevated permissions.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the user
    /// - `is_admin` - Whether the user should have admin privileges
    ///
    /// # Returns
    /// - `Ok(())` - Admin status updated successfully (or no matching user found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all users of a location with pagination.
    ///
    /// Returns a paginated list ordered alphabetically by name. Used for admin
    /// user management interfaces to display and manage the user base.
    ///
    /// # Arguments
    /// - `location_id` - Location whose users to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        location_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .filter(entity::user::Column::LocationId.eq(location_id))
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Deletes a user record.
    ///
    /// Only removes the user row itself; attendance rows and owned guests are
    /// removed by the service beforehand.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the user to delete
    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
