use super::*;
use chrono::NaiveDate;

/// Tests updating the profile fields of an existing user.
///
/// Expected: Ok with name, diet, and birthday replaced
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let user = factory::create_user(db, location.id).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            name: "New Name".to_string(),
            diet: DietPreference::Vegan,
            birthday: NaiveDate::from_ymd_opt(1990, 6, 15),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.diet, DietPreference::Vegan);
    assert_eq!(updated.birthday, NaiveDate::from_ymd_opt(1990, 6, 15));

    Ok(())
}

/// Tests updating a user that doesn't exist.
///
/// Expected: Ok(None) without touching the database
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParam {
            user_id: 9999,
            name: "Ghost".to_string(),
            diet: DietPreference::Omnivore,
            birthday: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
