use super::*;
use test_utils::factory::user::UserFactory;

/// Tests that pagination is scoped to one location.
///
/// Users of another location must not leak into the page or the total.
///
/// Expected: only the queried location's users, alphabetically ordered
#[tokio::test]
async fn scopes_to_location_and_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let here = factory::create_location(db).await?;
    let elsewhere = factory::create_location(db).await?;

    UserFactory::new(db, here.id).name("Bob").build().await?;
    UserFactory::new(db, here.id).name("Alice").build().await?;
    UserFactory::new(db, elsewhere.id).name("Eve").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(here.id, 0, 10).await?;

    assert_eq!(total, 2);
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    Ok(())
}

/// Tests page slicing.
///
/// Expected: second page holds the remainder
#[tokio::test]
async fn slices_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    for name in ["A", "B", "C"] {
        UserFactory::new(db, location.id).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(location.id, 0, 2).await?;
    let (second, _) = repo.get_all_paginated(location.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}
