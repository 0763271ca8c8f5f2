use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        location::{CreateLocationDto, LocationDto, UpdateLocationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::location::{CreateLocationParam, UpdateLocationParam},
        service::location::LocationService,
        state::AppState,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "location";

/// Create a location with a generated join code.
///
/// # Access Control
/// - `Admin` - Only admins can create locations
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Name empty or taken", body = ErrorDto),
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location = LocationService::new(&state.db)
        .create(CreateLocationParam { name: payload.name })
        .await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// List all locations.
///
/// # Access Control
/// - `Admin` - Only admins can list locations
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "All locations", body = Vec<LocationDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let locations = LocationService::new(&state.db).get_all().await?;
    let dtos: Vec<LocationDto> = locations.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single location.
#[utoipa::path(
    get,
    path = "/api/locations/{location_id}",
    tag = LOCATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "The location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location = LocationService::new(&state.db).get(location_id).await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Rename a location.
///
/// # Access Control
/// - `Admin` - Only admins can rename locations
#[utoipa::path(
    put,
    path = "/api/locations/{location_id}",
    tag = LOCATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location id")
    ),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Renamed location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 422, description = "Name empty or taken", body = ErrorDto),
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<UpdateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location = LocationService::new(&state.db)
        .update(UpdateLocationParam {
            id: location_id,
            name: payload.name,
        })
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Delete a location without users.
///
/// # Access Control
/// - `Admin` - Only admins can delete locations
#[utoipa::path(
    delete,
    path = "/api/locations/{location_id}",
    tag = LOCATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Location deleted", body = MessageDto),
        (status = 400, description = "Location still has users", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LocationService::new(&state.db).delete(location_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Location deleted".to_string(),
        }),
    ))
}
