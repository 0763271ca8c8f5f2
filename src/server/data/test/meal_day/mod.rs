use crate::server::data::meal_day::MealDayRepository;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod attendance;
mod create;
mod delete;
mod get_range;
mod set_meals;
