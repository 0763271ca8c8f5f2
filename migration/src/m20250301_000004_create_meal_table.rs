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
                    .table(Meal::Table)
                    .if_not_exists()
                    .col(pk_auto(Meal::Id))
                    .col(integer(Meal::LocationId))
                    .col(string(Meal::Title))
                    .col(text(Meal::Description))
                    .col(string_null(Meal::ImageUrl))
                    .col(json(Meal::Allergens))
                    .col(json(Meal::Seasons))
                    .col(
                        timestamp(Meal::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_location_id")
                            .from(Meal::Table, Meal::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Text search over the library goes through title/description filters
        manager
            .create_index(
                Index::create()
                    .name("idx_meal_title")
                    .table(Meal::Table)
                    .col(Meal::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Meal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Meal {
    Table,
    Id,
    LocationId,
    Title,
    Description,
    ImageUrl,
    Allergens,
    Seasons,
    CreatedAt,
}
