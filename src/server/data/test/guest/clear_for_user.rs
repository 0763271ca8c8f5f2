use super::*;

/// Tests the per-day bulk clear of one user's guests.
///
/// Only the clearing user's guests on that day disappear; other users'
/// guests and the same user's guests on other days survive.
///
/// Expected: Ok(2) removed, one guest left on the day
#[tokio::test]
async fn clears_only_own_guests_on_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, user, day) = create_meal_day_with_user(db).await?;
    let colleague = factory::create_user(db, location.id).await?;
    let other_day = factory::create_meal_day(db, location.id).await?;

    factory::create_guest(db, day.id, user.id).await?;
    factory::create_guest(db, day.id, user.id).await?;
    factory::create_guest(db, day.id, colleague.id).await?;
    let elsewhere = factory::create_guest(db, other_day.id, user.id).await?;

    let repo = GuestRepository::new(db);
    let removed = repo.clear_for_user(day.id, user.id).await?;

    assert_eq!(removed, 2);

    let remaining = repo.for_meal_day(day.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].added_by, colleague.id);

    // The same user's guest on another day is untouched
    assert!(repo.find_by_id(elsewhere.id).await?.is_some());

    Ok(())
}
