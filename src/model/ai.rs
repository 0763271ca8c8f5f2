use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Meal suggestion request payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestMealDto {
    /// Free-form constraints, e.g. "vegetarian winter dish without nuts".
    pub prompt: String,
}

/// AI-generated meal suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealSuggestionDto {
    pub title: String,
    pub description: String,
}

/// Description generation request for an existing title.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateDescriptionDto {
    pub title: String,
}

/// AI-generated description.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedDescriptionDto {
    pub description: String,
}

/// AI-generated meal image.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedImageDto {
    /// URL of the generated image as hosted by the provider.
    pub url: String,
}
