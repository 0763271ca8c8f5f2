use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Guest as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuestDto {
    pub id: i32,
    pub meal_day_id: i32,
    /// User who brings the guest.
    pub added_by: i32,
    /// Dietary preference, lowercase.
    pub diet: String,
}

/// Guest creation form payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddGuestDto {
    /// Dietary preference: omnivore, vegetarian, vegan or pescatarian.
    pub diet: String,
}
