use sea_orm::entity::prelude::*;

use crate::types::{AllergenSet, SeasonSet};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub allergens: AllergenSet,
    #[sea_orm(column_type = "Json")]
    pub seasons: SeasonSet,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Location,
    #[sea_orm(has_many = "super::meal_tag::Entity")]
    MealTag,
    #[sea_orm(has_many = "super::meal_day_meal::Entity")]
    MealDayMeal,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::meal_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealTag.def()
    }
}

impl Related<super::meal_day_meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealDayMeal.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::meal_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::meal_tag::Relation::Meal.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
