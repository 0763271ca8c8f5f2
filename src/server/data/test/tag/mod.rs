use crate::server::data::tag::TagRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod find_or_create;
mod set_meal_tags;
