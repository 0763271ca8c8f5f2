use super::*;
use crate::server::{
    data::meal_day::MealDayRepository, model::meal_day::MealScheduleParam,
};
use chrono::NaiveTime;

fn lunch_slot(meal_id: i32) -> MealScheduleParam {
    MealScheduleParam {
        meal_id,
        start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    }
}

/// Tests the transactional cascading delete.
///
/// A meal scheduled on two different meal days must disappear from both
/// schedules when deleted, while other meals' schedule entries survive.
///
/// Expected: Ok(2) pruned entries, meal gone, other schedules intact
#[tokio::test]
async fn prunes_meal_from_all_meal_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let doomed = factory::create_meal(db, location.id).await?;
    let survivor = factory::create_meal(db, location.id).await?;

    let day_repo = MealDayRepository::new(db);
    let monday = factory::create_meal_day(db, location.id).await?;
    let tuesday = factory::create_meal_day(db, location.id).await?;

    day_repo
        .set_meals(monday.id, &[lunch_slot(doomed.id), lunch_slot(survivor.id)])
        .await?;
    day_repo.set_meals(tuesday.id, &[lunch_slot(doomed.id)]).await?;

    let repo = MealRepository::new(db);
    let pruned = repo.delete_cascading(doomed.id).await?;

    assert_eq!(pruned, 2);
    assert!(repo.find_by_id(doomed.id).await?.is_none());

    // Survivor's schedule entry is untouched
    let monday_meals = day_repo.scheduled_meals(monday.id).await?;
    assert_eq!(monday_meals.len(), 1);
    assert_eq!(monday_meals[0].0.meal_id, survivor.id);

    let tuesday_meals = day_repo.scheduled_meals(tuesday.id).await?;
    assert!(tuesday_meals.is_empty());

    Ok(())
}

/// Tests deleting an unscheduled meal.
///
/// Expected: Ok(0), meal gone
#[tokio::test]
async fn deletes_unscheduled_meal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let meal = factory::create_meal(db, location.id).await?;

    let repo = MealRepository::new(db);
    let pruned = repo.delete_cascading(meal.id).await?;

    assert_eq!(pruned, 0);
    assert!(repo.find_by_id(meal.id).await?.is_none());

    Ok(())
}

/// Tests that tag links die with the meal while the tag rows survive.
///
/// Expected: link rows removed, shared tag still usable by other meals
#[tokio::test]
async fn removes_tag_links_but_keeps_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let meal = factory::create_meal(db, location.id).await?;
    let other = factory::create_meal(db, location.id).await?;

    let tag_repo = TagRepository::new(db);
    tag_repo.set_meal_tags(meal.id, &["shared".to_string()]).await?;
    tag_repo.set_meal_tags(other.id, &["shared".to_string()]).await?;

    let repo = MealRepository::new(db);
    repo.delete_cascading(meal.id).await?;

    assert_eq!(tag_repo.names_for_meal(other.id).await?, vec!["shared"]);

    Ok(())
}
