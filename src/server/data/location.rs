//! Location data repository for database operations.
//!
//! Manages workspace records: creation with generated join codes, uniqueness
//! lookups for names and codes, and the user count guard used before deletion.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::location::Location;

/// Repository providing database operations for location management.
pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    /// Creates a new LocationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a location with the given unique name and join code.
    ///
    /// # Arguments
    /// - `name` - Human-entered workspace name
    /// - `code` - Generated short code, already checked for uniqueness by the service
    ///
    /// # Returns
    /// - `Ok(Location)` - The created location
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
    pub async fn create(&self, name: String, code: String) -> Result<Location, DbErr> {
        let entity = entity::location::ActiveModel {
            name: ActiveValue::Set(name),
            code: ActiveValue::Set(code),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Location::from_entity(entity))
    }

    /// Finds a location by id.
    pub async fn find_by_id(
        &self,
        location_id: i32,
    ) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(location_id)
            .one(self.db)
            .await
    }

    /// Finds a location by its join code.
    ///
    /// Used during registration when a user joins an existing workspace.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::Location::find()
            .filter(entity::location::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Location::from_entity))
    }

    /// Checks whether a location name is already taken.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Location::find()
            .filter(entity::location::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a join code is already taken.
    ///
    /// The service regenerates codes until this returns false.
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Location::find()
            .filter(entity::location::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all locations ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }

    /// Renames a location.
    ///
    /// # Returns
    /// - `Ok(Some(Location))` - Updated location
    /// - `Ok(None)` - No location with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, location_id: i32, name: String) -> Result<Option<Location>, DbErr> {
        let Some(entity) = self.find_by_id(location_id).await? else {
            return Ok(None);
        };

        let mut active: entity::location::ActiveModel = entity.into();
        active.name = ActiveValue::Set(name);

        let updated = active.update(self.db).await?;

        Ok(Some(Location::from_entity(updated)))
    }

    /// Counts users registered under a location.
    ///
    /// Deletion is refused while this is non-zero.
    pub async fn count_users(&self, location_id: i32) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::LocationId.eq(location_id))
            .count(self.db)
            .await
    }

    /// Deletes a location record.
    pub async fn delete(&self, location_id: i32) -> Result<(), DbErr> {
        entity::prelude::Location::delete_by_id(location_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
