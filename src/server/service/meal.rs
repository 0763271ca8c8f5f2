//! Meal service for business logic.
//!
//! Orchestrates the meal library: CRUD with free-form tag resolution, text
//! search, image uploads, and the cascading delete that prunes a removed meal
//! from every scheduled meal day.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{meal::MealRepository, tag::TagRepository},
    error::AppError,
    model::meal::{
        CreateMealParam, Meal, PaginatedMeals, SearchMealsParam, UpdateMealParam,
    },
    service::storage::StorageClient,
};

/// Service providing business logic for the meal library.
pub struct MealService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MealService<'a> {
    /// Creates a new MealService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meal with its free-form tags.
    ///
    /// Tag labels are resolved through find-or-create, so referencing a new
    /// label mints the tag on demand and referencing a known one reuses it.
    ///
    /// # Returns
    /// - `Ok(Meal)` - The created meal with normalized tag labels
    /// - `Err(AppError::Validation)` - Empty title
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateMealParam) -> Result<Meal, AppError> {
        let meal_repo = MealRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);

        if param.title.trim().is_empty() {
            return Err(AppError::validation("title", "Title must not be empty"));
        }

        let tags = param.tags.clone();
        let entity = meal_repo.create(param).await?;
        let stored_tags = tag_repo.set_meal_tags(entity.id, &tags).await?;

        Ok(Meal::from_entity(entity, stored_tags))
    }

    /// Retrieves a meal by id within the caller's location.
    ///
    /// # Returns
    /// - `Ok(Meal)` - The meal with its tags
    /// - `Err(AppError::NotFound)` - Unknown id or meal of another location
    pub async fn get(&self, meal_id: i32, location_id: i32) -> Result<Meal, AppError> {
        let meal_repo = MealRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);

        let entity = self.find_in_location(&meal_repo, meal_id, location_id).await?;
        let tags = tag_repo.names_for_meal(entity.id).await?;

        Ok(Meal::from_entity(entity, tags))
    }

    /// Updates a meal and replaces its tag set.
    ///
    /// # Returns
    /// - `Ok(Meal)` - Updated meal
    /// - `Err(AppError::Validation)` - Empty title
    /// - `Err(AppError::NotFound)` - Unknown id or meal of another location
    pub async fn update(
        &self,
        param: UpdateMealParam,
        location_id: i32,
    ) -> Result<Meal, AppError> {
        let meal_repo = MealRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);

        if param.title.trim().is_empty() {
            return Err(AppError::validation("title", "Title must not be empty"));
        }

        self.find_in_location(&meal_repo, param.id, location_id).await?;

        let tags = param.tags.clone();
        let entity = meal_repo
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Meal not found".to_string()))?;
        let stored_tags = tag_repo.set_meal_tags(entity.id, &tags).await?;

        Ok(Meal::from_entity(entity, stored_tags))
    }

    /// Searches the meal library with pagination.
    ///
    /// # Returns
    /// - `Ok(PaginatedMeals)` - Matching meals with their tags and pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during search
    pub async fn search(&self, param: SearchMealsParam) -> Result<PaginatedMeals, AppError> {
        let meal_repo = MealRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);

        let (entities, total_items) = meal_repo.search(&param).await?;

        let mut meals = Vec::with_capacity(entities.len());
        for entity in entities {
            let tags = tag_repo.names_for_meal(entity.id).await?;
            meals.push(Meal::from_entity(entity, tags));
        }

        let total_pages = (total_items as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedMeals {
            meals,
            total: total_items,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Deletes a meal, pruning it from every meal day that scheduled it.
    ///
    /// The prune-and-delete runs in a single database transaction; on failure
    /// nothing is removed.
    ///
    /// # Returns
    /// - `Ok(pruned)` - Number of meal day schedule entries that referenced the meal
    /// - `Err(AppError::NotFound)` - Unknown id or meal of another location
    /// - `Err(AppError::DbErr)` - Database or transaction error
    pub async fn delete(&self, meal_id: i32, location_id: i32) -> Result<u64, AppError> {
        let meal_repo = MealRepository::new(self.db);

        self.find_in_location(&meal_repo, meal_id, location_id).await?;

        let pruned = meal_repo.delete_cascading(meal_id).await?;

        tracing::info!(
            "Deleted meal {} and pruned it from {} meal day(s)",
            meal_id,
            pruned
        );

        Ok(pruned)
    }

    /// Uploads a meal image and stores its public URL.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored image
    /// - `Err(AppError::NotFound)` - Unknown id or meal of another location
    /// - `Err(AppError)` - Storage upload or database error
    pub async fn upload_image(
        &self,
        storage: &StorageClient,
        meal_id: i32,
        location_id: i32,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let meal_repo = MealRepository::new(self.db);

        self.find_in_location(&meal_repo, meal_id, location_id).await?;

        let key = format!("meals/{}", meal_id);
        let url = storage.upload(&key, data, content_type).await?;

        meal_repo.set_image(meal_id, url.clone()).await?;

        Ok(url)
    }

    /// Looks up a meal and enforces the location boundary.
    async fn find_in_location(
        &self,
        meal_repo: &MealRepository<'_>,
        meal_id: i32,
        location_id: i32,
    ) -> Result<entity::meal::Model, AppError> {
        let entity = meal_repo
            .find_by_id(meal_id)
            .await?
            .filter(|m| m.location_id == location_id)
            .ok_or_else(|| AppError::NotFound("Meal not found".to_string()))?;

        Ok(entity)
    }
}
