use super::*;
use crate::server::model::meal::UpdateMealParam;

/// Tests updating a meal's fields and enum sets.
///
/// Expected: Ok(Some) with replaced values
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let meal = factory::create_meal(db, location.id).await?;

    let repo = MealRepository::new(db);
    let updated = repo
        .update(UpdateMealParam {
            id: meal.id,
            title: "New Title".to_string(),
            description: "New description".to_string(),
            allergens: vec![Allergen::Gluten],
            seasons: vec![Season::Autumn, Season::Winter],
            tags: Vec::new(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.allergens.0, vec![Allergen::Gluten]);
    assert_eq!(updated.seasons.0, vec![Season::Autumn, Season::Winter]);

    Ok(())
}

/// Tests updating an unknown meal.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_meal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MealRepository::new(db);
    let result = repo
        .update(UpdateMealParam {
            id: 9999,
            title: "Ghost".to_string(),
            description: "".to_string(),
            allergens: Vec::new(),
            seasons: Vec::new(),
            tags: Vec::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
