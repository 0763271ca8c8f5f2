use sea_orm::entity::prelude::*;

use crate::types::DietPreference;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub meal_day_id: i32,
    pub added_by: i32,
    pub diet: DietPreference,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meal_day::Entity",
        from = "Column::MealDayId",
        to = "super::meal_day::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MealDay,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AddedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::meal_day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealDay.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
