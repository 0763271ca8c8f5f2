//! Shared column types for the mealboard schema.
//!
//! Dietary preferences are stored as string-backed active enums, allergen and
//! season tags as JSON arrays on the meal row. All variants serialize to the
//! lowercase names used in API payloads.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Dietary preference of a user or guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    #[sea_orm(string_value = "omnivore")]
    Omnivore,
    #[sea_orm(string_value = "vegetarian")]
    Vegetarian,
    #[sea_orm(string_value = "vegan")]
    Vegan,
    #[sea_orm(string_value = "pescatarian")]
    Pescatarian,
}

impl DietPreference {
    /// Parses a lowercase API value into a diet preference.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "omnivore" => Some(Self::Omnivore),
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "pescatarian" => Some(Self::Pescatarian),
            _ => None,
        }
    }

    /// Lowercase name as used in API payloads and aggregation keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
        }
    }
}

/// Allergy tag carried by a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allergen {
    Gluten,
    Lactose,
    Nuts,
    Peanuts,
    Soy,
    Egg,
    Fish,
    Shellfish,
    Celery,
    Sesame,
}

impl Allergen {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gluten" => Some(Self::Gluten),
            "lactose" => Some(Self::Lactose),
            "nuts" => Some(Self::Nuts),
            "peanuts" => Some(Self::Peanuts),
            "soy" => Some(Self::Soy),
            "egg" => Some(Self::Egg),
            "fish" => Some(Self::Fish),
            "shellfish" => Some(Self::Shellfish),
            "celery" => Some(Self::Celery),
            "sesame" => Some(Self::Sesame),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gluten => "gluten",
            Self::Lactose => "lactose",
            Self::Nuts => "nuts",
            Self::Peanuts => "peanuts",
            Self::Soy => "soy",
            Self::Egg => "egg",
            Self::Fish => "fish",
            Self::Shellfish => "shellfish",
            Self::Celery => "celery",
            Self::Sesame => "sesame",
        }
    }
}

/// Season tag carried by a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }
}

/// JSON-backed allergen set column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AllergenSet(pub Vec<Allergen>);

/// JSON-backed season set column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SeasonSet(pub Vec<Season>);
