use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration form payload.
///
/// Exactly one of `location_code` (join an existing workspace) or
/// `location_name` (found a new workspace and become its first admin) must be
/// provided.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Dietary preference: omnivore, vegetarian, vegan or pescatarian.
    pub diet: String,
    /// Birthday as YYYY-MM-DD.
    pub birthday: Option<String>,
    /// Short code of the location to join.
    pub location_code: Option<String>,
    /// Name for a newly founded location.
    pub location_name: Option<String>,
}

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Forgot-password form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: String,
}

/// Reset-password form payload carrying the emailed token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub token: String,
    pub password: String,
}
