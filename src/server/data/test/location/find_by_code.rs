use super::*;

/// Tests looking a location up by its join code.
///
/// Expected: Some for a known code, None otherwise
#[tokio::test]
async fn finds_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let created = repo
        .create("Office".to_string(), "JOIN42".to_string())
        .await?;

    let found = repo.find_by_code("JOIN42").await?.unwrap();
    assert_eq!(found.id, created.id);

    assert!(repo.find_by_code("NOPE00").await?.is_none());

    Ok(())
}

/// Tests the user count guard used before deletion.
///
/// Expected: count follows registrations
#[tokio::test]
async fn counts_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = LocationRepository::new(db);
    assert_eq!(repo.count_users(location.id).await?, 0);

    factory::create_user(db, location.id).await?;
    factory::create_user(db, location.id).await?;

    assert_eq!(repo.count_users(location.id).await?, 2);

    Ok(())
}
