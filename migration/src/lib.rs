pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_location_table;
mod m20250301_000002_create_user_table;
mod m20250301_000003_create_tag_table;
mod m20250301_000004_create_meal_table;
mod m20250301_000005_create_meal_tag_table;
mod m20250302_000006_create_meal_day_table;
mod m20250302_000007_create_meal_day_meal_table;
mod m20250302_000008_create_meal_day_attendee_table;
mod m20250302_000009_create_guest_table;
mod m20250303_000010_create_announcement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_location_table::Migration),
            Box::new(m20250301_000002_create_user_table::Migration),
            Box::new(m20250301_000003_create_tag_table::Migration),
            Box::new(m20250301_000004_create_meal_table::Migration),
            Box::new(m20250301_000005_create_meal_tag_table::Migration),
            Box::new(m20250302_000006_create_meal_day_table::Migration),
            Box::new(m20250302_000007_create_meal_day_meal_table::Migration),
            Box::new(m20250302_000008_create_meal_day_attendee_table::Migration),
            Box::new(m20250302_000009_create_guest_table::Migration),
            Box::new(m20250303_000010_create_announcement_table::Migration),
        ]
    }
}
