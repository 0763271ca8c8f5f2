use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{PaginatedUsersDto, SetAdminDto, UpdateProfileDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        data::user::UserRepository,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::user::{GetAllUsersParam, SetAdminParam, UpdateProfileParam},
        service::user::UserService,
        state::AppState,
        util::parse::{parse_date, parse_diet},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List the users of the caller's location.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            location_id: admin.location_id,
            page: params.page,
            per_page: params.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Update the caller's own profile.
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let birthday = payload
        .birthday
        .as_deref()
        .map(|b| parse_date("birthday", b))
        .transpose()?;

    let updated = UserService::new(&state.db)
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            name: payload.name,
            diet: parse_diet("diet", &payload.diet)?,
            birthday,
        })
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Upload a profile image.
///
/// Accepts a multipart form with a single file field; the image is stored in
/// the object storage bucket and its public URL saved on the profile.
#[utoipa::path(
    post,
    path = "/api/users/me/image",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Image stored, URL on the profile", body = MessageDto),
        (status = 400, description = "No file in the form", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn upload_profile_image(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(field) = multipart.next_field().await? else {
        return Err(AppError::BadRequest("No file provided".to_string()));
    };

    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field.bytes().await?.to_vec();

    let url = UserService::new(&state.db)
        .upload_profile_image(&state.storage, user.id, data, &content_type)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message: url })))
}

/// Delete the caller's account.
///
/// Removes the user's attendance and guests, deletes the account, clears the
/// session, and sends a goodbye email.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .delete_account(&state.mail, user.id)
        .await?;

    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Account deleted".to_string(),
        }),
    ))
}

/// Grant or revoke admin privileges.
///
/// # Access Control
/// - `Admin` - Only admins can change admin status, and only for users of
///   their own location
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/admin",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User to modify")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "Admin status changed", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    // Admins only manage their own location's users
    let target = UserRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .filter(|u| u.location_id == admin.location_id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    UserService::new(&state.db)
        .set_admin(SetAdminParam {
            user_id: target.id,
            admin: payload.admin,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Admin status updated".to_string(),
        }),
    ))
}
