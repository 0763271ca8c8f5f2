//! Guest domain models and parameters.

use entity::types::DietPreference;

use crate::model::guest::GuestDto;

/// Non-user attendee added by a user, tracked only by dietary preference.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: i32,
    pub meal_day_id: i32,
    pub added_by: i32,
    pub diet: DietPreference,
}

impl Guest {
    pub fn from_entity(entity: entity::guest::Model) -> Self {
        Self {
            id: entity.id,
            meal_day_id: entity.meal_day_id,
            added_by: entity.added_by,
            diet: entity.diet,
        }
    }

    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            id: self.id,
            meal_day_id: self.meal_day_id,
            added_by: self.added_by,
            diet: self.diet.as_str().to_string(),
        }
    }
}

/// Parameters for adding a guest to a meal day.
#[derive(Debug, Clone)]
pub struct AddGuestParam {
    pub meal_day_id: i32,
    /// User bringing the guest.
    pub user_id: i32,
    pub diet: DietPreference,
}
