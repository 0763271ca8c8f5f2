use super::*;
use crate::server::data::guest::GuestRepository;
use crate::server::model::meal_day::MealScheduleParam;

/// Tests that deleting a meal day removes its children.
///
/// Schedule entries, attendance rows, and guests must disappear with the
/// day; guests are deleted, not orphaned.
///
/// Expected: day and all child rows gone, meal itself survives
#[tokio::test]
async fn deletes_day_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let user = factory::create_user(db, location.id).await?;
    let meal = factory::create_meal(db, location.id).await?;
    let day = factory::create_meal_day(db, location.id).await?;

    let repo = MealDayRepository::new(db);
    repo.set_meals(
        day.id,
        &[MealScheduleParam {
            meal_id: meal.id,
            start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        }],
    )
    .await?;
    repo.add_attendee(day.id, user.id).await?;

    let guest_repo = GuestRepository::new(db);
    let guest = factory::create_guest(db, day.id, user.id).await?;

    repo.delete(day.id).await?;

    assert!(repo.find_by_id(day.id).await?.is_none());
    assert!(guest_repo.find_by_id(guest.id).await?.is_none());

    // The meal library is untouched
    assert!(
        crate::server::data::meal::MealRepository::new(db)
            .find_by_id(meal.id)
            .await?
            .is_some()
    );

    Ok(())
}
