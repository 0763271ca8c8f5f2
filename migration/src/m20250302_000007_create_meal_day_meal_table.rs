use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_meal_table::Meal, m20250302_000006_create_meal_day_table::MealDay,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealDayMeal::Table)
                    .if_not_exists()
                    .col(integer(MealDayMeal::MealDayId))
                    .col(integer(MealDayMeal::MealId))
                    .col(time(MealDayMeal::StartTime))
                    .col(time(MealDayMeal::EndTime))
                    .primary_key(
                        Index::create()
                            .col(MealDayMeal::MealDayId)
                            .col(MealDayMeal::MealId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_day_meal_meal_day_id")
                            .from(MealDayMeal::Table, MealDayMeal::MealDayId)
                            .to(MealDay::Table, MealDay::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_day_meal_meal_id")
                            .from(MealDayMeal::Table, MealDayMeal::MealId)
                            .to(Meal::Table, Meal::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealDayMeal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MealDayMeal {
    Table,
    MealDayId,
    MealId,
    StartTime,
    EndTime,
}
