use crate::server::{
    data::{meal::MealRepository, tag::TagRepository},
    model::meal::SearchMealsParam,
};
use entity::types::{Allergen, Season};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use test_utils::factory::meal::MealFactory;

mod delete_cascading;
mod search;
mod update;

fn search_param(location_id: i32) -> SearchMealsParam {
    SearchMealsParam {
        location_id,
        query: None,
        tag: None,
        without_allergen: None,
        season: None,
        page: 0,
        per_page: 10,
    }
}
