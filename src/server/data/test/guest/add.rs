use super::*;

/// Tests adding and removing a guest.
///
/// Removal deletes the row; there is no orphan state.
///
/// Expected: guest retrievable after add, gone after delete
#[tokio::test]
async fn adds_and_deletes_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, day) = create_meal_day_with_user(db).await?;

    let repo = GuestRepository::new(db);
    let guest = repo
        .add(AddGuestParam {
            meal_day_id: day.id,
            user_id: user.id,
            diet: DietPreference::Vegan,
        })
        .await?;

    assert_eq!(guest.meal_day_id, day.id);
    assert_eq!(guest.added_by, user.id);
    assert_eq!(guest.diet, DietPreference::Vegan);

    repo.delete(guest.id).await?;
    assert!(repo.find_by_id(guest.id).await?.is_none());

    Ok(())
}

/// Tests listing the guests of one meal day.
///
/// Expected: only that day's guests
#[tokio::test]
async fn lists_guests_per_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, user, day) = create_meal_day_with_user(db).await?;
    let other_day = factory::create_meal_day(db, location.id).await?;

    factory::create_guest(db, day.id, user.id).await?;
    factory::create_guest(db, day.id, user.id).await?;
    factory::create_guest(db, other_day.id, user.id).await?;

    let repo = GuestRepository::new(db);
    assert_eq!(repo.for_meal_day(day.id).await?.len(), 2);
    assert_eq!(repo.for_meal_day(other_day.id).await?.len(), 1);

    Ok(())
}
