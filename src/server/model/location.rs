//! Location domain models and parameters.

use crate::model::location::LocationDto;

/// Workspace/tenant boundary identified by a unique name and join code.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub code: String,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            code: self.code,
        }
    }
}

/// Parameters for creating a location.
///
/// The join code is generated by the service, not supplied by callers.
#[derive(Debug, Clone)]
pub struct CreateLocationParam {
    pub name: String,
}

/// Parameters for renaming a location.
#[derive(Debug, Clone)]
pub struct UpdateLocationParam {
    pub id: i32,
    pub name: String,
}
