use crate::server::{data::guest::GuestRepository, model::guest::AddGuestParam};
use entity::types::DietPreference;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use test_utils::factory::helpers::create_meal_day_with_user;

mod add;
mod clear_for_user;
mod delete_all_for_user;
