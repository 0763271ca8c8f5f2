use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use entity::types::{Allergen, Season};

use crate::{
    model::{
        ai::{
            GenerateDescriptionDto, GeneratedDescriptionDto, GeneratedImageDto,
            MealSuggestionDto, SuggestMealDto,
        },
        api::{ErrorDto, MessageDto},
        meal::{CreateMealDto, MealDto, PaginatedMealsDto, UpdateMealDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::meal::{CreateMealParam, SearchMealsParam, UpdateMealParam},
        service::{ai::AiClient, meal::MealService},
        state::AppState,
        util::parse::{parse_allergens, parse_seasons},
    },
};

/// Tag for grouping meal endpoints in OpenAPI documentation
pub static MEAL_TAG: &str = "meal";

/// Query parameters for browsing/searching the meal library.
#[derive(Debug, Deserialize)]
pub struct MealSearchQuery {
    /// Free-text query matched against title and description.
    pub q: Option<String>,
    /// Restrict to meals carrying this free-form tag.
    pub tag: Option<String>,
    /// Restrict to meals NOT carrying this allergen.
    pub without_allergen: Option<String>,
    /// Restrict to meals tagged with this season.
    pub season: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// Browse or search the meal library.
///
/// Combines free-text search over title/description with tag, season, and
/// allergen-exclusion filters, paginated.
#[utoipa::path(
    get,
    path = "/api/meals",
    tag = MEAL_TAG,
    params(
        ("q" = Option<String>, Query, description = "Free-text query"),
        ("tag" = Option<String>, Query, description = "Filter by free-form tag"),
        ("without_allergen" = Option<String>, Query, description = "Exclude meals with this allergen"),
        ("season" = Option<String>, Query, description = "Filter by season"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Matching meals", body = PaginatedMealsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn search_meals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MealSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let without_allergen = query
        .without_allergen
        .as_deref()
        .map(|a| {
            Allergen::parse(a)
                .ok_or_else(|| AppError::validation("without_allergen", "Unknown allergy tag"))
        })
        .transpose()?;

    let season = query
        .season
        .as_deref()
        .map(|s| Season::parse(s).ok_or_else(|| AppError::validation("season", "Unknown season tag")))
        .transpose()?;

    let meals = MealService::new(&state.db)
        .search(SearchMealsParam {
            location_id: user.location_id,
            query: query.q,
            tag: query.tag,
            without_allergen,
            season,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(meals.into_dto())))
}

/// Get a single meal.
#[utoipa::path(
    get,
    path = "/api/meals/{meal_id}",
    tag = MEAL_TAG,
    params(
        ("meal_id" = i32, Path, description = "Meal id")
    ),
    responses(
        (status = 200, description = "The meal", body = MealDto),
        (status = 404, description = "Meal not found", body = ErrorDto),
    ),
)]
pub async fn get_meal(
    State(state): State<AppState>,
    session: Session,
    Path(meal_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let meal = MealService::new(&state.db)
        .get(meal_id, user.location_id)
        .await?;

    Ok((StatusCode::OK, Json(meal.into_dto())))
}

/// Create a meal in the library.
///
/// Free-form tags are created on demand and deduplicated by name.
///
/// # Access Control
/// - `Admin` - Only admins can manage the meal library
#[utoipa::path(
    post,
    path = "/api/meals",
    tag = MEAL_TAG,
    request_body = CreateMealDto,
    responses(
        (status = 201, description = "Meal created", body = MealDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Field validation failure", body = ErrorDto),
    ),
)]
pub async fn create_meal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMealDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let meal = MealService::new(&state.db)
        .create(CreateMealParam {
            location_id: admin.location_id,
            title: payload.title,
            description: payload.description,
            allergens: parse_allergens("allergens", &payload.allergens)?,
            seasons: parse_seasons("seasons", &payload.seasons)?,
            tags: payload.tags,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(meal.into_dto())))
}

/// Update a meal.
///
/// # Access Control
/// - `Admin` - Only admins can manage the meal library
#[utoipa::path(
    put,
    path = "/api/meals/{meal_id}",
    tag = MEAL_TAG,
    params(
        ("meal_id" = i32, Path, description = "Meal id")
    ),
    request_body = UpdateMealDto,
    responses(
        (status = 200, description = "Updated meal", body = MealDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Meal not found", body = ErrorDto),
    ),
)]
pub async fn update_meal(
    State(state): State<AppState>,
    session: Session,
    Path(meal_id): Path<i32>,
    Json(payload): Json<UpdateMealDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let meal = MealService::new(&state.db)
        .update(
            UpdateMealParam {
                id: meal_id,
                title: payload.title,
                description: payload.description,
                allergens: parse_allergens("allergens", &payload.allergens)?,
                seasons: parse_seasons("seasons", &payload.seasons)?,
                tags: payload.tags,
            },
            admin.location_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(meal.into_dto())))
}

/// Delete a meal and prune it from every meal day.
///
/// Runs as a single database transaction: either the meal and every schedule
/// entry referencing it disappear together, or nothing changes.
///
/// # Access Control
/// - `Admin` - Only admins can manage the meal library
#[utoipa::path(
    delete,
    path = "/api/meals/{meal_id}",
    tag = MEAL_TAG,
    params(
        ("meal_id" = i32, Path, description = "Meal id")
    ),
    responses(
        (status = 200, description = "Meal deleted", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Meal not found", body = ErrorDto),
    ),
)]
pub async fn delete_meal(
    State(state): State<AppState>,
    session: Session,
    Path(meal_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let pruned = MealService::new(&state.db)
        .delete(meal_id, admin.location_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Meal deleted, removed from {} meal day(s)", pruned),
        }),
    ))
}

/// Upload a meal image.
///
/// # Access Control
/// - `Admin` - Only admins can manage the meal library
#[utoipa::path(
    post,
    path = "/api/meals/{meal_id}/image",
    tag = MEAL_TAG,
    params(
        ("meal_id" = i32, Path, description = "Meal id")
    ),
    responses(
        (status = 200, description = "Image stored, URL on the meal", body = MessageDto),
        (status = 400, description = "No file in the form", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Meal not found", body = ErrorDto),
    ),
)]
pub async fn upload_meal_image(
    State(state): State<AppState>,
    session: Session,
    Path(meal_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(field) = multipart.next_field().await? else {
        return Err(AppError::BadRequest("No file provided".to_string()));
    };

    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field.bytes().await?.to_vec();

    let url = MealService::new(&state.db)
        .upload_image(&state.storage, meal_id, admin.location_id, data, &content_type)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message: url })))
}

/// Ask the AI for a meal suggestion.
///
/// Optional feature: answers 503 when no AI provider is configured.
///
/// # Access Control
/// - `Admin` - Only admins can use the AI features
#[utoipa::path(
    post,
    path = "/api/meals/suggest",
    tag = MEAL_TAG,
    request_body = SuggestMealDto,
    responses(
        (status = 200, description = "AI-proposed meal", body = MealSuggestionDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 503, description = "AI provider not configured", body = ErrorDto),
    ),
)]
pub async fn suggest_meal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SuggestMealDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ai = require_ai(&state)?;
    let suggestion = ai.suggest_meal(&payload.prompt).await?;

    Ok((
        StatusCode::OK,
        Json(MealSuggestionDto {
            title: suggestion.title,
            description: suggestion.description,
        }),
    ))
}

/// Ask the AI for a description of a meal title.
///
/// # Access Control
/// - `Admin` - Only admins can use the AI features
#[utoipa::path(
    post,
    path = "/api/meals/generate-description",
    tag = MEAL_TAG,
    request_body = GenerateDescriptionDto,
    responses(
        (status = 200, description = "AI-written description", body = GeneratedDescriptionDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 503, description = "AI provider not configured", body = ErrorDto),
    ),
)]
pub async fn generate_description(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GenerateDescriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ai = require_ai(&state)?;
    let description = ai.generate_description(&payload.title).await?;

    Ok((StatusCode::OK, Json(GeneratedDescriptionDto { description })))
}

/// Ask the AI for a meal image.
///
/// # Access Control
/// - `Admin` - Only admins can use the AI features
#[utoipa::path(
    post,
    path = "/api/meals/generate-image",
    tag = MEAL_TAG,
    request_body = GenerateDescriptionDto,
    responses(
        (status = 200, description = "AI-generated image URL", body = GeneratedImageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 503, description = "AI provider not configured", body = ErrorDto),
    ),
)]
pub async fn generate_image(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GenerateDescriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ai = require_ai(&state)?;
    let url = ai.generate_image(&payload.title).await?;

    Ok((StatusCode::OK, Json(GeneratedImageDto { url })))
}

fn require_ai(state: &AppState) -> Result<&AiClient, AppError> {
    state.ai.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("AI features are not configured".to_string())
    })
}
