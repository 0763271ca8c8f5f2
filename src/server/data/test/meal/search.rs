use super::*;

/// Tests free-text search over title and description.
///
/// Expected: matches in either field, scoped to the location
#[tokio::test]
async fn matches_title_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    MealFactory::new(db, location.id)
        .title("Pumpkin Soup")
        .description("Creamy autumn classic")
        .build()
        .await?;
    MealFactory::new(db, location.id)
        .title("Chili")
        .description("Hot pumpkin chili with beans")
        .build()
        .await?;
    MealFactory::new(db, location.id)
        .title("Salad")
        .description("Green leaves")
        .build()
        .await?;

    let repo = MealRepository::new(db);

    let (found, total) = repo
        .search(&SearchMealsParam {
            query: Some("pumpkin".to_string()),
            ..search_param(location.id)
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(found.len(), 2);

    Ok(())
}

/// Tests that search never leaks meals of other locations.
///
/// Expected: only the queried location's meals
#[tokio::test]
async fn scopes_to_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let here = factory::create_location(db).await?;
    let elsewhere = factory::create_location(db).await?;

    factory::create_meal(db, here.id).await?;
    factory::create_meal(db, elsewhere.id).await?;

    let repo = MealRepository::new(db);
    let (found, total) = repo.search(&search_param(here.id)).await?;

    assert_eq!(total, 1);
    assert_eq!(found[0].location_id, here.id);

    Ok(())
}

/// Tests the season filter on the JSON-backed season set.
///
/// Expected: only meals tagged with the requested season
#[tokio::test]
async fn filters_by_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    MealFactory::new(db, location.id)
        .title("Stew")
        .seasons(vec![Season::Winter])
        .build()
        .await?;
    MealFactory::new(db, location.id)
        .title("Salad")
        .seasons(vec![Season::Summer])
        .build()
        .await?;

    let repo = MealRepository::new(db);
    let (found, _) = repo
        .search(&SearchMealsParam {
            season: Some(Season::Winter),
            ..search_param(location.id)
        })
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Stew");

    Ok(())
}

/// Tests the allergen exclusion filter.
///
/// Expected: meals carrying the excluded allergen disappear from results
#[tokio::test]
async fn excludes_allergen() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    MealFactory::new(db, location.id)
        .title("Peanut Curry")
        .allergens(vec![Allergen::Peanuts, Allergen::Soy])
        .build()
        .await?;
    MealFactory::new(db, location.id)
        .title("Plain Rice")
        .build()
        .await?;

    let repo = MealRepository::new(db);
    let (found, _) = repo
        .search(&SearchMealsParam {
            without_allergen: Some(Allergen::Peanuts),
            ..search_param(location.id)
        })
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Plain Rice");

    Ok(())
}

/// Tests the free-form tag filter joined through the tag tables.
///
/// Expected: only meals linked to the tag, matched case-insensitively
#[tokio::test]
async fn filters_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let tagged = factory::create_meal(db, location.id).await?;
    factory::create_meal(db, location.id).await?;

    let tag_repo = TagRepository::new(db);
    tag_repo
        .set_meal_tags(tagged.id, &["favorite".to_string()])
        .await?;

    let repo = MealRepository::new(db);
    let (found, _) = repo
        .search(&SearchMealsParam {
            tag: Some("Favorite".to_string()),
            ..search_param(location.id)
        })
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, tagged.id);

    Ok(())
}
