use super::*;

/// Tests renaming a location.
///
/// Expected: Ok(Some) with the new name; None for unknown ids
#[tokio::test]
async fn renames_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = LocationRepository::new(db);
    let updated = repo
        .update_name(location.id, "Renamed".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.code, location.code);

    assert!(repo.update_name(9999, "Ghost".to_string()).await?.is_none());

    Ok(())
}
