use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Human-readable error message.
    pub error: String,
}

/// Validation error response body attached to a specific form field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Name of the form field the error belongs to.
    pub field: String,
    /// Human-readable error message for that field.
    pub error: String,
}

/// Generic confirmation response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
