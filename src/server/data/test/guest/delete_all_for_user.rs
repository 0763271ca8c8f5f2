use super::*;

/// Tests deleting every guest a user ever added.
///
/// Used during account deletion: the leaving user's guests disappear across
/// all meal days while other users' guests survive.
///
/// Expected: Ok(2) removed, colleague's guest intact
#[tokio::test]
async fn removes_guests_across_all_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, leaver, monday) = create_meal_day_with_user(db).await?;
    let colleague = factory::create_user(db, location.id).await?;
    let tuesday = factory::create_meal_day(db, location.id).await?;

    factory::create_guest(db, monday.id, leaver.id).await?;
    factory::create_guest(db, tuesday.id, leaver.id).await?;
    let kept = factory::create_guest(db, monday.id, colleague.id).await?;

    let repo = GuestRepository::new(db);
    let removed = repo.delete_all_for_user(leaver.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.find_by_id(kept.id).await?.is_some());
    assert_eq!(repo.for_meal_day(tuesday.id).await?.len(), 0);

    Ok(())
}
