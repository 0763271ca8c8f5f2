use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_user_table::User, m20250302_000006_create_meal_day_table::MealDay,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::Id))
                    .col(integer(Guest::MealDayId))
                    .col(integer(Guest::AddedBy))
                    .col(string_len(Guest::Diet, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_meal_day_id")
                            .from(Guest::Table, Guest::MealDayId)
                            .to(MealDay::Table, MealDay::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_added_by")
                            .from(Guest::Table, Guest::AddedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    Table,
    Id,
    MealDayId,
    AddedBy,
    Diet,
}
