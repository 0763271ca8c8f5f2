use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Location (workspace) as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    /// Generated short code used to join the location.
    pub code: String,
}

/// Location creation form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLocationDto {
    pub name: String,
}

/// Location rename form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLocationDto {
    pub name: String,
}
