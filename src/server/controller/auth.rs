use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, MessageDto},
        auth::{ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::{AuthService, RegisterParam},
        state::AppState,
        util::parse::{parse_date, parse_diet},
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user account.
///
/// Creates a user under an existing location (by join code) or a freshly
/// founded one (by name; the registering user becomes its admin). On success
/// the new user is logged in immediately and receives a welcome email.
///
/// # Returns
/// - `201 Created` - Account created and session established
/// - `422 Unprocessable Entity` - Field validation failure
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 422, description = "Field validation failure", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.mail, &state.jwt_secret);

    let birthday = payload
        .birthday
        .as_deref()
        .map(|b| parse_date("birthday", b))
        .transpose()?;

    let param = RegisterParam {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        diet: parse_diet("diet", &payload.diet)?,
        birthday,
        location_code: payload.location_code,
        location_name: payload.location_name,
    };

    let user = auth_service.register(param).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials matched, session established
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.mail, &state.jwt_secret);

    let user = auth_service.login(&payload.email, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and clear the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - The logged-in user's profile
/// - `401 Unauthorized` - No valid session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(crate::server::model::user::User::from_entity(user).into_dto()),
    ))
}

/// Request a password reset email.
///
/// Always answers 200 so the endpoint cannot be used to probe which email
/// addresses are registered.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset email sent if the address is known", body = MessageDto),
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.mail, &state.jwt_secret);

    auth_service
        .forgot_password(&payload.email, &state.app_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "If that address is registered, a reset email is on its way.".to_string(),
        }),
    ))
}

/// Reset the password with an emailed token.
///
/// On success the user is logged in with the new password.
///
/// # Returns
/// - `200 OK` - Password replaced, session established
/// - `400 Bad Request` - Invalid or expired token
/// - `422 Unprocessable Entity` - New password too short
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password replaced", body = UserDto),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 422, description = "Password validation failure", body = FieldErrorDto),
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.mail, &state.jwt_secret);

    let user = auth_service
        .reset_password(&payload.token, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
