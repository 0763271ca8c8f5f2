use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateProfileParam},
};
use entity::types::DietPreference;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod delete;
mod get_all_paginated;
mod set_admin;
mod update_profile;
