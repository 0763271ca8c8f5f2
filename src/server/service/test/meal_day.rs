use chrono::{NaiveDate, NaiveTime};
use entity::types::DietPreference;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use test_utils::factory::{guest::GuestFactory, user::UserFactory};

use crate::server::{
    error::AppError,
    model::meal_day::{
        CreateMealDayParam, GetOverviewParam, MealScheduleParam, WeeklyAttendanceParam,
    },
    service::meal_day::MealDayService,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn slot(meal_id: i32) -> MealScheduleParam {
    MealScheduleParam {
        meal_id,
        start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    }
}

/// Tests that a date can only be scheduled once per location.
///
/// Expected: validation error on the date field for the second create
#[tokio::test]
async fn create_rejects_duplicate_date() {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();

    let service = MealDayService::new(db);
    service
        .create(CreateMealDayParam {
            location_id: location.id,
            date: date(10),
            meals: Vec::new(),
        })
        .await
        .unwrap();

    let result = service
        .create(CreateMealDayParam {
            location_id: location.id,
            date: date(10),
            meals: Vec::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation { ref field, .. }) if field == "date"
    ));
}

/// Tests that scheduling a foreign location's meal is rejected.
///
/// Expected: BadRequest naming the offending meal
#[tokio::test]
async fn create_rejects_foreign_meal() {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let here = factory::create_location(db).await.unwrap();
    let elsewhere = factory::create_location(db).await.unwrap();
    let foreign_meal = factory::create_meal(db, elsewhere.id).await.unwrap();

    let service = MealDayService::new(db);
    let result = service
        .create(CreateMealDayParam {
            location_id: here.id,
            date: date(10),
            meals: vec![slot(foreign_meal.id)],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests the aggregated overview: joins and per-diet counts.
///
/// Two attendees (vegan, omnivore) plus two guests (vegan, vegetarian) must
/// produce a headcount of four and merged per-diet counts. The requesting
/// user's own attendance is flagged.
///
/// Expected: one overview with total 4, vegan 2, omnivore 1, vegetarian 1
#[tokio::test]
async fn overview_merges_attendees_and_guests() {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();
    let meal = factory::create_meal(db, location.id).await.unwrap();

    let vegan = UserFactory::new(db, location.id)
        .diet(DietPreference::Vegan)
        .build()
        .await
        .unwrap();
    let omnivore = UserFactory::new(db, location.id)
        .diet(DietPreference::Omnivore)
        .build()
        .await
        .unwrap();

    let service = MealDayService::new(db);
    let day_id = service
        .create(CreateMealDayParam {
            location_id: location.id,
            date: date(10),
            meals: vec![slot(meal.id)],
        })
        .await
        .unwrap();

    service
        .set_attendance(day_id, location.id, vegan.id, true)
        .await
        .unwrap();
    service
        .set_attendance(day_id, location.id, omnivore.id, true)
        .await
        .unwrap();

    GuestFactory::new(db, day_id, vegan.id)
        .diet(DietPreference::Vegan)
        .build()
        .await
        .unwrap();
    GuestFactory::new(db, day_id, omnivore.id)
        .diet(DietPreference::Vegetarian)
        .build()
        .await
        .unwrap();

    let overviews = service
        .get_overview(GetOverviewParam {
            location_id: location.id,
            user_id: vegan.id,
            from: date(10),
            to: date(10),
        })
        .await
        .unwrap();

    assert_eq!(overviews.len(), 1);
    let overview = &overviews[0];

    assert_eq!(overview.meals.len(), 1);
    assert_eq!(overview.meals[0].meal.id, meal.id);
    assert_eq!(overview.attendees.len(), 2);
    assert_eq!(overview.guests.len(), 2);
    assert_eq!(overview.total_count(), 4);
    assert!(overview.attending);

    let counts = overview.diet_counts();
    assert_eq!(counts.get(&DietPreference::Vegan), Some(&2));
    assert_eq!(counts.get(&DietPreference::Omnivore), Some(&1));
    assert_eq!(counts.get(&DietPreference::Vegetarian), Some(&1));
}

/// Tests that the attendance toggle stays idempotent through the service.
///
/// Expected: attend twice, one attendee; withdraw twice, zero attendees
#[tokio::test]
async fn attendance_toggle_is_idempotent() {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();
    let user = factory::create_user(db, location.id).await.unwrap();

    let service = MealDayService::new(db);
    let day_id = service
        .create(CreateMealDayParam {
            location_id: location.id,
            date: date(10),
            meals: Vec::new(),
        })
        .await
        .unwrap();

    service
        .set_attendance(day_id, location.id, user.id, true)
        .await
        .unwrap();
    service
        .set_attendance(day_id, location.id, user.id, true)
        .await
        .unwrap();

    let overview = &service
        .get_overview(GetOverviewParam {
            location_id: location.id,
            user_id: user.id,
            from: date(10),
            to: date(10),
        })
        .await
        .unwrap()[0];
    assert_eq!(overview.attendees.len(), 1);

    service
        .set_attendance(day_id, location.id, user.id, false)
        .await
        .unwrap();
    service
        .set_attendance(day_id, location.id, user.id, false)
        .await
        .unwrap();

    let overview = &service
        .get_overview(GetOverviewParam {
            location_id: location.id,
            user_id: user.id,
            from: date(10),
            to: date(10),
        })
        .await
        .unwrap()[0];
    assert!(overview.attendees.is_empty());
}

/// Tests the weekly bulk attendance form.
///
/// Dates without a scheduled meal day are skipped; the rest are applied.
///
/// Expected: 2 days applied, attendance matching the form
#[tokio::test]
async fn weekly_form_applies_existing_days_only() {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await.unwrap();
    let user = factory::create_user(db, location.id).await.unwrap();

    let service = MealDayService::new(db);
    let monday = service
        .create(CreateMealDayParam {
            location_id: location.id,
            date: date(10),
            meals: Vec::new(),
        })
        .await
        .unwrap();
    service
        .create(CreateMealDayParam {
            location_id: location.id,
            date: date(11),
            meals: Vec::new(),
        })
        .await
        .unwrap();

    // Pre-attend Monday so the form's "false" withdraws it
    service
        .set_attendance(monday, location.id, user.id, true)
        .await
        .unwrap();

    let applied = service
        .set_week_attendance(WeeklyAttendanceParam {
            location_id: location.id,
            user_id: user.id,
            days: vec![
                (date(10), false),
                (date(11), true),
                (date(12), true), // no meal day scheduled
            ],
        })
        .await
        .unwrap();

    assert_eq!(applied, 2);

    let overviews = service
        .get_overview(GetOverviewParam {
            location_id: location.id,
            user_id: user.id,
            from: date(10),
            to: date(12),
        })
        .await
        .unwrap();

    assert_eq!(overviews.len(), 2);
    assert!(!overviews[0].attending);
    assert!(overviews[1].attending);
}
