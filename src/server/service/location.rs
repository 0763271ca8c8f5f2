//! Location service for business logic.
//!
//! Locations are the workspace/tenant boundary: every user, meal, and meal day
//! hangs off one. Names are human-entered and globally unique; join codes are
//! generated and regenerated until unique.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::location::LocationRepository,
    error::AppError,
    model::location::{CreateLocationParam, Location, UpdateLocationParam},
    util::code::generate_location_code,
};

/// Service providing business logic for location management.
pub struct LocationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    /// Creates a new LocationService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a location with a generated unique join code.
    ///
    /// # Returns
    /// - `Ok(Location)` - The created location
    /// - `Err(AppError::Validation)` - Empty or already-taken name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateLocationParam) -> Result<Location, AppError> {
        let location_repo = LocationRepository::new(self.db);

        let name = param.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name", "Location name must not be empty"));
        }
        if location_repo.name_exists(name).await? {
            return Err(AppError::validation(
                "name",
                "A location with this name already exists",
            ));
        }

        // Regenerate on the (unlikely) code collision
        let code = loop {
            let candidate = generate_location_code();
            if !location_repo.code_exists(&candidate).await? {
                break candidate;
            }
        };

        let location = location_repo.create(name.to_string(), code).await?;

        Ok(location)
    }

    /// Retrieves all locations.
    pub async fn get_all(&self) -> Result<Vec<Location>, AppError> {
        let location_repo = LocationRepository::new(self.db);
        let locations = location_repo.get_all().await?;
        Ok(locations)
    }

    /// Retrieves a location by id.
    ///
    /// # Returns
    /// - `Ok(Location)` - The location
    /// - `Err(AppError::NotFound)` - No location with that id
    pub async fn get(&self, location_id: i32) -> Result<Location, AppError> {
        let location_repo = LocationRepository::new(self.db);

        let location = location_repo
            .find_by_id(location_id)
            .await?
            .map(Location::from_entity)
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

        Ok(location)
    }

    /// Renames a location, keeping names globally unique.
    ///
    /// # Returns
    /// - `Ok(Location)` - Updated location
    /// - `Err(AppError::Validation)` - Empty or already-taken name
    /// - `Err(AppError::NotFound)` - No location with that id
    pub async fn update(&self, param: UpdateLocationParam) -> Result<Location, AppError> {
        let location_repo = LocationRepository::new(self.db);

        let name = param.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name", "Location name must not be empty"));
        }

        let Some(existing) = location_repo.find_by_id(param.id).await? else {
            return Err(AppError::NotFound("Location not found".to_string()));
        };

        if existing.name != name && location_repo.name_exists(name).await? {
            return Err(AppError::validation(
                "name",
                "A location with this name already exists",
            ));
        }

        let updated = location_repo
            .update_name(param.id, name.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

        Ok(updated)
    }

    /// Deletes a location without users.
    ///
    /// # Returns
    /// - `Ok(())` - Location deleted
    /// - `Err(AppError::BadRequest)` - Users are still registered under the location
    /// - `Err(AppError::NotFound)` - No location with that id
    pub async fn delete(&self, location_id: i32) -> Result<(), AppError> {
        let location_repo = LocationRepository::new(self.db);

        if location_repo.find_by_id(location_id).await?.is_none() {
            return Err(AppError::NotFound("Location not found".to_string()));
        }

        let users = location_repo.count_users(location_id).await?;
        if users > 0 {
            return Err(AppError::BadRequest(
                "Cannot delete a location that still has users".to_string(),
            ));
        }

        location_repo.delete(location_id).await?;

        Ok(())
    }
}
