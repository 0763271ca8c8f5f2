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
                    .table(MealDayAttendee::Table)
                    .if_not_exists()
                    .col(integer(MealDayAttendee::MealDayId))
                    .col(integer(MealDayAttendee::UserId))
                    // Composite key keeps the attendee list deduplicated per user
                    .primary_key(
                        Index::create()
                            .col(MealDayAttendee::MealDayId)
                            .col(MealDayAttendee::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_day_attendee_meal_day_id")
                            .from(MealDayAttendee::Table, MealDayAttendee::MealDayId)
                            .to(MealDay::Table, MealDay::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_day_attendee_user_id")
                            .from(MealDayAttendee::Table, MealDayAttendee::UserId)
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
            .drop_table(Table::drop().table(MealDayAttendee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MealDayAttendee {
    Table,
    MealDayId,
    UserId,
}
