use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_tag::Entity")]
    MealTag,
}

impl Related<super::meal_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealTag.def()
    }
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        super::meal_tag::Relation::Meal.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::meal_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
