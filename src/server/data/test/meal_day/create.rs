use super::*;

/// Tests creating a meal day and finding it by date.
///
/// Expected: day retrievable by (location, date)
#[tokio::test]
async fn creates_and_finds_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let repo = MealDayRepository::new(db);
    let day = repo.create(location.id, date).await?;

    let found = repo.find_by_date(location.id, date).await?.unwrap();
    assert_eq!(found.id, day.id);
    assert_eq!(found.date, date);

    Ok(())
}

/// Tests that the same date is free in a different location.
///
/// Dates are unique per location, not globally across workspaces.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn same_date_allowed_in_other_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let here = factory::create_location(db).await?;
    let elsewhere = factory::create_location(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let repo = MealDayRepository::new(db);
    repo.create(here.id, date).await?;
    repo.create(elsewhere.id, date).await?;

    assert!(repo.find_by_date(here.id, date).await?.is_some());
    assert!(repo.find_by_date(elsewhere.id, date).await?.is_some());

    Ok(())
}
