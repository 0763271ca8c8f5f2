use super::*;
use crate::server::model::meal_day::MealScheduleParam;

fn slot(meal_id: i32, start_h: u32, end_h: u32) -> MealScheduleParam {
    MealScheduleParam {
        meal_id,
        start_time: NaiveTime::from_hms_opt(start_h, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end_h, 0, 0).unwrap(),
    }
}

/// Tests replacing the meal schedule.
///
/// Expected: old entries removed, new ones present with their times
#[tokio::test]
async fn replaces_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let soup = factory::create_meal(db, location.id).await?;
    let stew = factory::create_meal(db, location.id).await?;
    let day = factory::create_meal_day(db, location.id).await?;

    let repo = MealDayRepository::new(db);

    repo.set_meals(day.id, &[slot(soup.id, 12, 13)]).await?;
    repo.set_meals(day.id, &[slot(stew.id, 18, 19)]).await?;

    let scheduled = repo.scheduled_meals(day.id).await?;
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].0.meal_id, stew.id);
    assert_eq!(
        scheduled[0].0.start_time,
        NaiveTime::from_hms_opt(18, 0, 0).unwrap()
    );

    Ok(())
}

/// Tests that a meal listed twice collapses to one entry.
///
/// Expected: single schedule row for the duplicated meal
#[tokio::test]
async fn dedups_duplicate_meals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let meal = factory::create_meal(db, location.id).await?;
    let day = factory::create_meal_day(db, location.id).await?;

    let repo = MealDayRepository::new(db);
    repo.set_meals(day.id, &[slot(meal.id, 12, 13), slot(meal.id, 18, 19)])
        .await?;

    let scheduled = repo.scheduled_meals(day.id).await?;
    assert_eq!(scheduled.len(), 1);

    Ok(())
}

/// Tests that scheduled meals come back ordered by serving start.
///
/// Expected: breakfast before dinner regardless of insertion order
#[tokio::test]
async fn orders_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let dinner = factory::create_meal(db, location.id).await?;
    let breakfast = factory::create_meal(db, location.id).await?;
    let day = factory::create_meal_day(db, location.id).await?;

    let repo = MealDayRepository::new(db);
    repo.set_meals(day.id, &[slot(dinner.id, 18, 19), slot(breakfast.id, 8, 9)])
        .await?;

    let scheduled = repo.scheduled_meals(day.id).await?;
    assert_eq!(scheduled[0].0.meal_id, breakfast.id);
    assert_eq!(scheduled[1].0.meal_id, dinner.id);

    Ok(())
}
