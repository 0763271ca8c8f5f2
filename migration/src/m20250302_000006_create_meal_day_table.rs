use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealDay::Table)
                    .if_not_exists()
                    .col(pk_auto(MealDay::Id))
                    .col(integer(MealDay::LocationId))
                    .col(date(MealDay::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_day_location_id")
                            .from(MealDay::Table, MealDay::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One meal day per date within a location
        manager
            .create_index(
                Index::create()
                    .name("idx_meal_day_location_date")
                    .table(MealDay::Table)
                    .col(MealDay::LocationId)
                    .col(MealDay::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealDay::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MealDay {
    Table,
    Id,
    LocationId,
    Date,
}
