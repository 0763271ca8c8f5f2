use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_day")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub date: Date,
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
    #[sea_orm(has_many = "super::meal_day_meal::Entity")]
    MealDayMeal,
    #[sea_orm(has_many = "super::meal_day_attendee::Entity")]
    MealDayAttendee,
    #[sea_orm(has_many = "super::guest::Entity")]
    Guest,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::meal_day_meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealDayMeal.def()
    }
}

impl Related<super::meal_day_attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealDayAttendee.def()
    }
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
