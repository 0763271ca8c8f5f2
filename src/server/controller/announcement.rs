use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        announcement::{
            AnnouncementDto, CreateAnnouncementDto, PaginatedAnnouncementsDto,
            UpdateAnnouncementDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::announcement::{CreateAnnouncementParam, UpdateAnnouncementParam},
        service::announcement::AnnouncementService,
        state::AppState,
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// Get the location's announcement feed, newest first.
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated announcements", body = PaginatedAnnouncementsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_announcements(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let announcements = AnnouncementService::new(&state.db)
        .get_paginated(user.location_id, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(announcements.into_dto())))
}

/// Post an announcement.
///
/// # Access Control
/// - `Admin` - Only admins can post announcements
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Announcement posted", body = AnnouncementDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Field validation failure", body = ErrorDto),
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .create(CreateAnnouncementParam {
            location_id: admin.location_id,
            created_by: admin.id,
            title: payload.title,
            body: payload.body,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// Edit an announcement.
///
/// # Access Control
/// - `Admin` - Only admins can edit announcements
#[utoipa::path(
    put,
    path = "/api/announcements/{announcement_id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("announcement_id" = i32, Path, description = "Announcement id")
    ),
    request_body = UpdateAnnouncementDto,
    responses(
        (status = 200, description = "Updated announcement", body = AnnouncementDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(announcement_id): Path<i32>,
    Json(payload): Json<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .update(
            UpdateAnnouncementParam {
                id: announcement_id,
                title: payload.title,
                body: payload.body,
            },
            admin.location_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Delete an announcement.
///
/// # Access Control
/// - `Admin` - Only admins can delete announcements
#[utoipa::path(
    delete,
    path = "/api/announcements/{announcement_id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("announcement_id" = i32, Path, description = "Announcement id")
    ),
    responses(
        (status = 200, description = "Announcement deleted", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(announcement_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AnnouncementService::new(&state.db)
        .delete(announcement_id, admin.location_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Announcement deleted".to_string(),
        }),
    ))
}
