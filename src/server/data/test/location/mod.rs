use crate::server::data::location::LocationRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod find_by_code;
mod update_name;
