use super::*;
use test_utils::factory::meal_day::create_meal_day_on;

/// Tests the inclusive date range query.
///
/// Expected: days on the bounds included, outside excluded, ordered by date
#[tokio::test]
async fn returns_inclusive_ordered_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
    create_meal_day_on(db, location.id, d(12)).await?;
    create_meal_day_on(db, location.id, d(10)).await?;
    create_meal_day_on(db, location.id, d(14)).await?;
    create_meal_day_on(db, location.id, d(9)).await?;

    let repo = MealDayRepository::new(db);
    let days = repo.get_range(location.id, d(10), d(14)).await?;

    let dates: Vec<NaiveDate> = days.iter().map(|day| day.date).collect();
    assert_eq!(dates, vec![d(10), d(12), d(14)]);

    Ok(())
}

/// Tests that the range is scoped to one location.
///
/// Expected: other locations' days never appear
#[tokio::test]
async fn scopes_to_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let here = factory::create_location(db).await?;
    let elsewhere = factory::create_location(db).await?;

    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    create_meal_day_on(db, here.id, date).await?;
    create_meal_day_on(db, elsewhere.id, date).await?;

    let repo = MealDayRepository::new(db);
    let days = repo.get_range(here.id, date, date).await?;

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].location_id, here.id);

    Ok(())
}
