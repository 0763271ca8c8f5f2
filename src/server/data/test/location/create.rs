use super::*;

/// Tests creating a location.
///
/// Expected: Ok with name and code stored
#[tokio::test]
async fn creates_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let location = repo
        .create("Head Office".to_string(), "HQ0001".to_string())
        .await?;

    assert_eq!(location.name, "Head Office");
    assert_eq!(location.code, "HQ0001");

    Ok(())
}

/// Tests the global uniqueness of location names.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    repo.create("Office".to_string(), "AAA111".to_string())
        .await?;

    let result = repo.create("Office".to_string(), "BBB222".to_string()).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the global uniqueness of join codes.
///
/// Expected: Err on the second insert with the same code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    repo.create("First".to_string(), "SAME01".to_string())
        .await?;

    let result = repo.create("Second".to_string(), "SAME01".to_string()).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the name and code existence checks.
///
/// Expected: true only for stored values
#[tokio::test]
async fn existence_checks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    repo.create("Office".to_string(), "AAA111".to_string())
        .await?;

    assert!(repo.name_exists("Office").await?);
    assert!(!repo.name_exists("Warehouse").await?);
    assert!(repo.code_exists("AAA111").await?);
    assert!(!repo.code_exists("ZZZ999").await?);

    Ok(())
}
