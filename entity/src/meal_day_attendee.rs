use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_day_attendee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub meal_day_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
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
        from = "Column::UserId",
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
