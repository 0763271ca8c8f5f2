//! Meal domain models and parameters.

use entity::types::{Allergen, Season};

use crate::model::meal::{MealDto, PaginatedMealsDto};

/// Meal from the library with its allergy, season, and free-form tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub id: i32,
    pub location_id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub allergens: Vec<Allergen>,
    pub seasons: Vec<Season>,
    /// Deduplicated free-form tag labels.
    pub tags: Vec<String>,
}

impl Meal {
    /// Builds the domain model from a meal entity and its resolved tag labels.
    pub fn from_entity(entity: entity::meal::Model, tags: Vec<String>) -> Self {
        Self {
            id: entity.id,
            location_id: entity.location_id,
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
            allergens: entity.allergens.0,
            seasons: entity.seasons.0,
            tags,
        }
    }

    pub fn into_dto(self) -> MealDto {
        MealDto {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            allergens: self
                .allergens
                .iter()
                .map(|a| a.as_str().to_string())
                .collect(),
            seasons: self.seasons.iter().map(|s| s.as_str().to_string()).collect(),
            tags: self.tags,
        }
    }
}

/// Parameters for creating a meal.
#[derive(Debug, Clone)]
pub struct CreateMealParam {
    pub location_id: i32,
    pub title: String,
    pub description: String,
    pub allergens: Vec<Allergen>,
    pub seasons: Vec<Season>,
    /// Free-form tag labels; unknown labels are created on demand.
    pub tags: Vec<String>,
}

/// Parameters for updating a meal.
#[derive(Debug, Clone)]
pub struct UpdateMealParam {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub allergens: Vec<Allergen>,
    pub seasons: Vec<Season>,
    pub tags: Vec<String>,
}

/// Parameters for browsing/searching the meal library.
#[derive(Debug, Clone)]
pub struct SearchMealsParam {
    pub location_id: i32,
    /// Free-text query matched against title and description.
    pub query: Option<String>,
    /// Restrict to meals carrying this free-form tag.
    pub tag: Option<String>,
    /// Restrict to meals NOT carrying this allergen.
    pub without_allergen: Option<Allergen>,
    /// Restrict to meals tagged with this season.
    pub season: Option<Season>,
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of meals with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMeals {
    pub meals: Vec<Meal>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMeals {
    pub fn into_dto(self) -> PaginatedMealsDto {
        PaginatedMealsDto {
            meals: self.meals.into_iter().map(|m| m.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
