use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Days, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        meal_day::{
            CreateMealDayDto, MealDayOverviewDto, ScheduleMealDto, UpdateMealDayMealsDto,
            WeeklyAttendanceDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::meal_day::{
            CreateMealDayParam, GetOverviewParam, MealScheduleParam, WeeklyAttendanceParam,
        },
        service::meal_day::MealDayService,
        state::AppState,
        util::parse::{parse_date, parse_time},
    },
};

/// Tag for grouping meal day endpoints in OpenAPI documentation
pub static MEAL_DAY_TAG: &str = "meal_day";

/// Days shown by default when the range query omits `to`.
const DEFAULT_RANGE_DAYS: u64 = 13;

/// Query parameters for the meal day overview range.
#[derive(Debug, Deserialize)]
pub struct OverviewQuery {
    /// Inclusive range start as YYYY-MM-DD; defaults to today.
    pub from: Option<String>,
    /// Inclusive range end as YYYY-MM-DD; defaults to two weeks after `from`.
    pub to: Option<String>,
}

/// Get the aggregated meal day overview for a date range.
///
/// For every scheduled day in the caller's location: the scheduled meals with
/// serving times, the attendee list, the guests, the combined headcount, and
/// per-diet counts merging user and guest diets.
#[utoipa::path(
    get,
    path = "/api/meal-days",
    tag = MEAL_DAY_TAG,
    params(
        ("from" = Option<String>, Query, description = "Range start YYYY-MM-DD (default: today)"),
        ("to" = Option<String>, Query, description = "Range end YYYY-MM-DD (default: two weeks out)")
    ),
    responses(
        (status = 200, description = "Overview per day, ordered by date", body = Vec<MealDayOverviewDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OverviewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let from = match &query.from {
        Some(raw) => parse_date("from", raw)?,
        None => Utc::now().date_naive(),
    };
    let to = match &query.to {
        Some(raw) => parse_date("to", raw)?,
        None => from
            .checked_add_days(Days::new(DEFAULT_RANGE_DAYS))
            .unwrap_or(from),
    };

    if to < from {
        return Err(AppError::validation("to", "Range end lies before its start"));
    }

    let overviews = MealDayService::new(&state.db)
        .get_overview(GetOverviewParam {
            location_id: user.location_id,
            user_id: user.id,
            from,
            to,
        })
        .await?;

    let dtos: Vec<MealDayOverviewDto> = overviews.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a meal day with its meal schedule.
///
/// # Access Control
/// - `Admin` - Only admins can schedule meal days
#[utoipa::path(
    post,
    path = "/api/meal-days",
    tag = MEAL_DAY_TAG,
    request_body = CreateMealDayDto,
    responses(
        (status = 201, description = "Meal day created", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Date already scheduled or invalid", body = ErrorDto),
    ),
)]
pub async fn create_meal_day(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMealDayDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let date = parse_date("date", &payload.date)?;
    let meals = parse_schedule(&payload.meals)?;

    let id = MealDayService::new(&state.db)
        .create(CreateMealDayParam {
            location_id: admin.location_id,
            date,
            meals,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: format!("Meal day {} created", id),
        }),
    ))
}

/// Replace the meal schedule of a meal day.
///
/// # Access Control
/// - `Admin` - Only admins can change schedules
#[utoipa::path(
    put,
    path = "/api/meal-days/{meal_day_id}/meals",
    tag = MEAL_DAY_TAG,
    params(
        ("meal_day_id" = i32, Path, description = "Meal day id")
    ),
    request_body = UpdateMealDayMealsDto,
    responses(
        (status = 200, description = "Schedule replaced", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Meal day not found", body = ErrorDto),
    ),
)]
pub async fn update_meal_day_meals(
    State(state): State<AppState>,
    session: Session,
    Path(meal_day_id): Path<i32>,
    Json(payload): Json<UpdateMealDayMealsDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let meals = parse_schedule(&payload.meals)?;

    MealDayService::new(&state.db)
        .replace_meals(meal_day_id, admin.location_id, meals)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Schedule updated".to_string(),
        }),
    ))
}

/// Mark the caller as attending a meal day.
///
/// Idempotent: attending an already-attended day changes nothing.
#[utoipa::path(
    post,
    path = "/api/meal-days/{meal_day_id}/attend",
    tag = MEAL_DAY_TAG,
    params(
        ("meal_day_id" = i32, Path, description = "Meal day id")
    ),
    responses(
        (status = 200, description = "Attendance recorded", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Meal day not found", body = ErrorDto),
    ),
)]
pub async fn attend(
    State(state): State<AppState>,
    session: Session,
    Path(meal_day_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MealDayService::new(&state.db)
        .set_attendance(meal_day_id, user.location_id, user.id, true)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Attendance recorded".to_string(),
        }),
    ))
}

/// Withdraw the caller's attendance from a meal day.
///
/// Idempotent: withdrawing while not attending changes nothing.
#[utoipa::path(
    delete,
    path = "/api/meal-days/{meal_day_id}/attend",
    tag = MEAL_DAY_TAG,
    params(
        ("meal_day_id" = i32, Path, description = "Meal day id")
    ),
    responses(
        (status = 200, description = "Attendance withdrawn", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Meal day not found", body = ErrorDto),
    ),
)]
pub async fn unattend(
    State(state): State<AppState>,
    session: Session,
    Path(meal_day_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MealDayService::new(&state.db)
        .set_attendance(meal_day_id, user.location_id, user.id, false)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Attendance withdrawn".to_string(),
        }),
    ))
}

/// Apply a weekly attendance form.
///
/// Each entry sets attendance for one date; dates without a scheduled meal
/// day are skipped.
#[utoipa::path(
    post,
    path = "/api/meal-days/attendance",
    tag = MEAL_DAY_TAG,
    request_body = WeeklyAttendanceDto,
    responses(
        (status = 200, description = "Attendance applied", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
    ),
)]
pub async fn set_week_attendance(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<WeeklyAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut days = Vec::with_capacity(payload.days.len());
    for entry in &payload.days {
        days.push((parse_date("date", &entry.date)?, entry.attending));
    }

    let applied = MealDayService::new(&state.db)
        .set_week_attendance(WeeklyAttendanceParam {
            location_id: user.location_id,
            user_id: user.id,
            days,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Attendance set for {} day(s)", applied),
        }),
    ))
}

/// Delete a meal day.
///
/// # Access Control
/// - `Admin` - Only admins can delete meal days
#[utoipa::path(
    delete,
    path = "/api/meal-days/{meal_day_id}",
    tag = MEAL_DAY_TAG,
    params(
        ("meal_day_id" = i32, Path, description = "Meal day id")
    ),
    responses(
        (status = 200, description = "Meal day deleted", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Meal day not found", body = ErrorDto),
    ),
)]
pub async fn delete_meal_day(
    State(state): State<AppState>,
    session: Session,
    Path(meal_day_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MealDayService::new(&state.db)
        .delete(meal_day_id, admin.location_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Meal day deleted".to_string(),
        }),
    ))
}

/// Parses the schedule entries of a create/update payload.
fn parse_schedule(entries: &[ScheduleMealDto]) -> Result<Vec<MealScheduleParam>, AppError> {
    let mut meals = Vec::with_capacity(entries.len());

    for entry in entries {
        let start_time = parse_time("start_time", &entry.start_time)?;
        let end_time = parse_time("end_time", &entry.end_time)?;

        if end_time <= start_time {
            return Err(AppError::validation(
                "end_time",
                "Serving end must lie after its start",
            ));
        }

        meals.push(MealScheduleParam {
            meal_id: entry.meal_id,
            start_time,
            end_time,
        });
    }

    Ok(meals)
}
