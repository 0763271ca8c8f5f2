use super::*;

/// Tests that tags are deduplicated by normalized name.
///
/// Referencing "Soup", "soup", and " SOUP " must all resolve to one row.
///
/// Expected: same tag id for every spelling
#[tokio::test]
async fn dedups_by_normalized_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);

    let first = repo.find_or_create("Soup").await?;
    let second = repo.find_or_create("soup").await?;
    let third = repo.find_or_create("  SOUP  ").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.id, third.id);
    assert_eq!(first.name, "soup");

    Ok(())
}

/// Tests that distinct names create distinct tags.
///
/// Expected: two rows with different ids
#[tokio::test]
async fn creates_distinct_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);

    let soup = repo.find_or_create("soup").await?;
    let stew = repo.find_or_create("stew").await?;

    assert_ne!(soup.id, stew.id);

    Ok(())
}
