use entity::types::{Allergen, Season};
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::{
    data::meal_day::MealDayRepository,
    error::AppError,
    model::{
        meal::{CreateMealParam, SearchMealsParam, UpdateMealParam},
        meal_day::MealScheduleParam,
    },
    service::meal::MealService,
};
use chrono::NaiveTime;

fn create_param(location_id: i32) -> CreateMealParam {
    CreateMealParam {
        location_id,
        title: "Pumpkin Soup".to_string(),
        description: "Creamy autumn classic".to_string(),
        allergens: vec![Allergen::Celery],
        seasons: vec![Season::Autumn],
        tags: vec!["Soup".to_string(), "soup".to_string(), "cozy".to_string()],
    }
}

/// Tests meal creation with tag resolution.
///
/// Duplicate labels in the payload collapse; the stored labels come back
/// normalized.
///
/// Expected: tags ["soup", "cozy"]
#[tokio::test]
async fn creates_meal_with_deduped_tags() {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();

    let service = MealService::new(db);
    let meal = service.create(create_param(location.id)).await.unwrap();

    assert_eq!(meal.title, "Pumpkin Soup");
    assert_eq!(meal.tags, vec!["soup".to_string(), "cozy".to_string()]);
    assert_eq!(meal.allergens, vec![Allergen::Celery]);
}

/// Tests the location boundary on reads.
///
/// Expected: NotFound for a meal of another location
#[tokio::test]
async fn get_respects_location_boundary() {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let here = factory::create_location(db).await.unwrap();
    let elsewhere = factory::create_location(db).await.unwrap();

    let service = MealService::new(db);
    let meal = service.create(create_param(here.id)).await.unwrap();

    assert!(service.get(meal.id, here.id).await.is_ok());
    assert!(matches!(
        service.get(meal.id, elsewhere.id).await,
        Err(AppError::NotFound(_))
    ));
}

/// Tests updating a meal and replacing its tags.
///
/// Expected: new field values and the new tag set only
#[tokio::test]
async fn update_replaces_tags() {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();

    let service = MealService::new(db);
    let meal = service.create(create_param(location.id)).await.unwrap();

    let updated = service
        .update(
            UpdateMealParam {
                id: meal.id,
                title: "Roasted Pumpkin Soup".to_string(),
                description: meal.description.clone(),
                allergens: Vec::new(),
                seasons: vec![Season::Winter],
                tags: vec!["hearty".to_string()],
            },
            location.id,
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Roasted Pumpkin Soup");
    assert_eq!(updated.tags, vec!["hearty".to_string()]);
    assert!(updated.allergens.is_empty());
}

/// Tests the service-level cascading delete.
///
/// Expected: prune count propagated, schedule entry gone
#[tokio::test]
async fn delete_prunes_schedules() {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();

    let service = MealService::new(db);
    let meal = service.create(create_param(location.id)).await.unwrap();

    let day_repo = MealDayRepository::new(db);
    let day = factory::create_meal_day(db, location.id).await.unwrap();
    day_repo
        .set_meals(
            day.id,
            &[MealScheduleParam {
                meal_id: meal.id,
                start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            }],
        )
        .await
        .unwrap();

    let pruned = service.delete(meal.id, location.id).await.unwrap();

    assert_eq!(pruned, 1);
    assert!(day_repo.scheduled_meals(day.id).await.unwrap().is_empty());
    assert!(matches!(
        service.get(meal.id, location.id).await,
        Err(AppError::NotFound(_))
    ));
}

/// Tests search through the service, tags included in results.
///
/// Expected: match carries its tag labels
#[tokio::test]
async fn search_includes_tags() {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();

    let service = MealService::new(db);
    service.create(create_param(location.id)).await.unwrap();

    let page = service
        .search(SearchMealsParam {
            location_id: location.id,
            query: Some("pumpkin".to_string()),
            tag: None,
            without_allergen: None,
            season: None,
            page: 0,
            per_page: 10,
        })
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.meals[0].tags, vec!["cozy".to_string(), "soup".to_string()]);
}
