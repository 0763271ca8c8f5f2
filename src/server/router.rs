use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{announcement, auth, guest, location, meal, meal_day, user},
    state::AppState,
};

/// OpenAPI documentation for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        auth::forgot_password,
        auth::reset_password,
        user::get_users,
        user::update_profile,
        user::upload_profile_image,
        user::delete_account,
        user::set_admin,
        location::create_location,
        location::get_locations,
        location::get_location,
        location::update_location,
        location::delete_location,
        meal::search_meals,
        meal::get_meal,
        meal::create_meal,
        meal::update_meal,
        meal::delete_meal,
        meal::upload_meal_image,
        meal::suggest_meal,
        meal::generate_description,
        meal::generate_image,
        meal_day::get_overview,
        meal_day::create_meal_day,
        meal_day::update_meal_day_meals,
        meal_day::attend,
        meal_day::unattend,
        meal_day::set_week_attendance,
        meal_day::delete_meal_day,
        guest::add_guest,
        guest::remove_guest,
        guest::clear_guests,
        announcement::get_announcements,
        announcement::create_announcement,
        announcement::update_announcement,
        announcement::delete_announcement,
    ),
    info(
        title = "mealboard",
        description = "Workplace communal meal planning API"
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/me",
            put(user::update_profile).delete(user::delete_account),
        )
        .route("/api/users/me/image", post(user::upload_profile_image))
        .route("/api/users/{user_id}/admin", put(user::set_admin))
        .route(
            "/api/locations",
            post(location::create_location).get(location::get_locations),
        )
        .route(
            "/api/locations/{location_id}",
            get(location::get_location)
                .put(location::update_location)
                .delete(location::delete_location),
        )
        .route(
            "/api/meals",
            get(meal::search_meals).post(meal::create_meal),
        )
        .route("/api/meals/suggest", post(meal::suggest_meal))
        .route(
            "/api/meals/generate-description",
            post(meal::generate_description),
        )
        .route("/api/meals/generate-image", post(meal::generate_image))
        .route(
            "/api/meals/{meal_id}",
            get(meal::get_meal)
                .put(meal::update_meal)
                .delete(meal::delete_meal),
        )
        .route("/api/meals/{meal_id}/image", post(meal::upload_meal_image))
        .route(
            "/api/meal-days",
            get(meal_day::get_overview).post(meal_day::create_meal_day),
        )
        .route(
            "/api/meal-days/attendance",
            post(meal_day::set_week_attendance),
        )
        .route(
            "/api/meal-days/{meal_day_id}",
            axum::routing::delete(meal_day::delete_meal_day),
        )
        .route(
            "/api/meal-days/{meal_day_id}/meals",
            put(meal_day::update_meal_day_meals),
        )
        .route(
            "/api/meal-days/{meal_day_id}/attend",
            post(meal_day::attend).delete(meal_day::unattend),
        )
        .route(
            "/api/meal-days/{meal_day_id}/guests",
            post(guest::add_guest).delete(guest::clear_guests),
        )
        .route(
            "/api/guests/{guest_id}",
            axum::routing::delete(guest::remove_guest),
        )
        .route(
            "/api/announcements",
            get(announcement::get_announcements).post(announcement::create_announcement),
        )
        .route(
            "/api/announcements/{announcement_id}",
            put(announcement::update_announcement).delete(announcement::delete_announcement),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
