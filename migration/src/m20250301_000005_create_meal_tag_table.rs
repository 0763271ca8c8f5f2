use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_tag_table::Tag, m20250301_000004_create_meal_table::Meal,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealTag::Table)
                    .if_not_exists()
                    .col(integer(MealTag::MealId))
                    .col(integer(MealTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(MealTag::MealId)
                            .col(MealTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_tag_meal_id")
                            .from(MealTag::Table, MealTag::MealId)
                            .to(Meal::Table, Meal::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_tag_tag_id")
                            .from(MealTag::Table, MealTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MealTag {
    Table,
    MealId,
    TagId,
}
