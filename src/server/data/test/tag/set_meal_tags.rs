use super::*;

/// Tests replacing the tag set of a meal.
///
/// Expected: old links removed, new labels stored normalized and deduplicated
#[tokio::test]
async fn replaces_and_dedups_tag_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let meal = factory::create_meal(db, location.id).await?;

    let repo = TagRepository::new(db);

    repo.set_meal_tags(meal.id, &["soup".to_string(), "winter".to_string()])
        .await?;

    let stored = repo
        .set_meal_tags(
            meal.id,
            &["Stew".to_string(), "stew".to_string(), "hearty".to_string()],
        )
        .await?;

    assert_eq!(stored, vec!["stew".to_string(), "hearty".to_string()]);

    let names = repo.names_for_meal(meal.id).await?;
    assert_eq!(names, vec!["hearty".to_string(), "stew".to_string()]);

    Ok(())
}

/// Tests that blank labels are ignored.
///
/// Expected: empty strings never become tags
#[tokio::test]
async fn skips_blank_labels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let meal = factory::create_meal(db, location.id).await?;

    let repo = TagRepository::new(db);
    let stored = repo
        .set_meal_tags(meal.id, &["".to_string(), "  ".to_string(), "real".to_string()])
        .await?;

    assert_eq!(stored, vec!["real".to_string()]);

    Ok(())
}

/// Tests that two meals share one tag row.
///
/// Expected: the label appears on both meals without duplicating the tag
#[tokio::test]
async fn shares_tags_between_meals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let first = factory::create_meal(db, location.id).await?;
    let second = factory::create_meal(db, location.id).await?;

    let repo = TagRepository::new(db);
    repo.set_meal_tags(first.id, &["shared".to_string()]).await?;
    repo.set_meal_tags(second.id, &["shared".to_string()]).await?;

    let tag_a = repo.find_or_create("shared").await?;

    assert_eq!(repo.names_for_meal(first.id).await?, vec!["shared"]);
    assert_eq!(repo.names_for_meal(second.id).await?, vec!["shared"]);

    // Still a single tag row
    let again = repo.find_or_create("shared").await?;
    assert_eq!(tag_a.id, again.id);

    Ok(())
}
