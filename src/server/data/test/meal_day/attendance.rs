use super::*;
use test_utils::factory::helpers::create_meal_day_with_user;

/// Tests that attending is idempotent.
///
/// A user attends a meal day at most once: the second add reports no change
/// and the attendee list stays deduplicated.
///
/// Expected: first add true, second add false, one attendee row
#[tokio::test]
async fn attending_twice_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, day) = create_meal_day_with_user(db).await?;

    let repo = MealDayRepository::new(db);

    assert!(repo.add_attendee(day.id, user.id).await?);
    assert!(!repo.add_attendee(day.id, user.id).await?);

    let attendees = repo.attendees(day.id).await?;
    assert_eq!(attendees.len(), 1);
    assert_eq!(attendees[0].id, user.id);

    Ok(())
}

/// Tests withdrawing attendance.
///
/// Expected: attendee list empties; withdrawing again is a no-op
#[tokio::test]
async fn withdraws_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, day) = create_meal_day_with_user(db).await?;

    let repo = MealDayRepository::new(db);
    repo.add_attendee(day.id, user.id).await?;

    repo.remove_attendee(day.id, user.id).await?;
    assert!(repo.attendees(day.id).await?.is_empty());

    // Idempotent
    repo.remove_attendee(day.id, user.id).await?;

    Ok(())
}

/// Tests the is_attending check.
///
/// Expected: follows add/remove
#[tokio::test]
async fn reports_attendance_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, day) = create_meal_day_with_user(db).await?;

    let repo = MealDayRepository::new(db);

    assert!(!repo.is_attending(day.id, user.id).await?);
    repo.add_attendee(day.id, user.id).await?;
    assert!(repo.is_attending(day.id, user.id).await?);

    Ok(())
}

/// Tests clearing a user's attendance across all days.
///
/// Used during account deletion.
///
/// Expected: both days lose the user, other attendees stay
#[tokio::test]
async fn removes_all_attendance_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let leaver = factory::create_user(db, location.id).await?;
    let stayer = factory::create_user(db, location.id).await?;
    let monday = factory::create_meal_day(db, location.id).await?;
    let tuesday = factory::create_meal_day(db, location.id).await?;

    let repo = MealDayRepository::new(db);
    repo.add_attendee(monday.id, leaver.id).await?;
    repo.add_attendee(monday.id, stayer.id).await?;
    repo.add_attendee(tuesday.id, leaver.id).await?;

    repo.remove_all_attendance(leaver.id).await?;

    let monday_attendees = repo.attendees(monday.id).await?;
    assert_eq!(monday_attendees.len(), 1);
    assert_eq!(monday_attendees[0].id, stayer.id);
    assert!(repo.attendees(tuesday.id).await?.is_empty());

    Ok(())
}
