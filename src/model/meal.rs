use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Meal as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Allergy tags, lowercase enum names.
    pub allergens: Vec<String>,
    /// Season tags, lowercase enum names.
    pub seasons: Vec<String>,
    /// Free-form tag labels.
    pub tags: Vec<String>,
}

/// Meal creation form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMealDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    /// Free-form tag labels, created on demand.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Meal update form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateMealDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Paginated collection of meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedMealsDto {
    pub meals: Vec<MealDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
