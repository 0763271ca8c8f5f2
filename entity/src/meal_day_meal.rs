use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_day_meal")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub meal_day_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub meal_id: i32,
    pub start_time: Time,
    pub end_time: Time,
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
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Meal,
}

impl Related<super::meal_day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealDay.def()
    }
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
