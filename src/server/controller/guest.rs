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
        guest::{AddGuestDto, GuestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::guest::AddGuestParam,
        service::guest::GuestService,
        state::AppState,
        util::parse::parse_diet,
    },
};

/// Tag for grouping guest endpoints in OpenAPI documentation
pub static GUEST_TAG: &str = "guest";

/// Add a guest to a meal day.
///
/// The guest is tracked only by dietary preference and counts toward the
/// day's headcount and per-diet totals.
#[utoipa::path(
    post,
    path = "/api/meal-days/{meal_day_id}/guests",
    tag = GUEST_TAG,
    params(
        ("meal_day_id" = i32, Path, description = "Meal day id")
    ),
    request_body = AddGuestDto,
    responses(
        (status = 201, description = "Guest added", body = GuestDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Meal day not found", body = ErrorDto),
    ),
)]
pub async fn add_guest(
    State(state): State<AppState>,
    session: Session,
    Path(meal_day_id): Path<i32>,
    Json(payload): Json<AddGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let guest = GuestService::new(&state.db)
        .add(
            AddGuestParam {
                meal_day_id,
                user_id: user.id,
                diet: parse_diet("diet", &payload.diet)?,
            },
            user.location_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(guest.into_dto())))
}

/// Remove a single guest.
///
/// Users may remove their own guests; admins may remove anyone's. The guest
/// record is deleted outright.
#[utoipa::path(
    delete,
    path = "/api/guests/{guest_id}",
    tag = GUEST_TAG,
    params(
        ("guest_id" = i32, Path, description = "Guest id")
    ),
    responses(
        (status = 200, description = "Guest removed", body = MessageDto),
        (status = 403, description = "Guest belongs to someone else", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
    ),
)]
pub async fn remove_guest(
    State(state): State<AppState>,
    session: Session,
    Path(guest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    GuestService::new(&state.db)
        .remove(guest_id, user.id, user.admin)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Guest removed".to_string(),
        }),
    ))
}

/// Bulk-clear the caller's guests on a meal day.
#[utoipa::path(
    delete,
    path = "/api/meal-days/{meal_day_id}/guests",
    tag = GUEST_TAG,
    params(
        ("meal_day_id" = i32, Path, description = "Meal day id")
    ),
    responses(
        (status = 200, description = "Guests cleared", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Meal day not found", body = ErrorDto),
    ),
)]
pub async fn clear_guests(
    State(state): State<AppState>,
    session: Session,
    Path(meal_day_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let removed = GuestService::new(&state.db)
        .clear_own(meal_day_id, user.location_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Removed {} guest(s)", removed),
        }),
    ))
}
