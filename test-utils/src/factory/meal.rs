//! Meal factory for creating test meal entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::types::{Allergen, AllergenSet, Season, SeasonSet};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test meals with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::meal::MealFactory;
///
/// let meal = MealFactory::new(&db, location.id)
///     .title("Pumpkin Soup")
///     .allergens(vec![Allergen::Celery])
///     .seasons(vec![Season::Autumn])
///     .build()
///     .await?;
/// ```
pub struct MealFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    title: String,
    description: String,
    image_url: Option<String>,
    allergens: Vec<Allergen>,
    seasons: Vec<Season>,
}

impl<'a> MealFactory<'a> {
    /// Creates a new MealFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Meal {id}"` where id is auto-incremented
    /// - description: `"Test meal description"`
    /// - no image, no allergens, no seasons
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `location_id` - Location the meal belongs to
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            location_id,
            title: format!("Meal {}", id),
            description: "Test meal description".to_string(),
            image_url: None,
            allergens: Vec::new(),
            seasons: Vec::new(),
        }
    }

    /// Sets the meal title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the meal description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the meal image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Sets the allergen tags.
    pub fn allergens(mut self, allergens: Vec<Allergen>) -> Self {
        self.allergens = allergens;
        self
    }

    /// Sets the season tags.
    pub fn seasons(mut self, seasons: Vec<Season>) -> Self {
        self.seasons = seasons;
        self
    }

    /// Builds and inserts the meal entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::meal::Model)` - Created meal entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::meal::Model, DbErr> {
        entity::meal::ActiveModel {
            location_id: ActiveValue::Set(self.location_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            allergens: ActiveValue::Set(AllergenSet(self.allergens)),
            seasons: ActiveValue::Set(SeasonSet(self.seasons)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a meal with default values in the given location.
pub async fn create_meal(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::meal::Model, DbErr> {
    MealFactory::new(db, location_id).build().await
}
