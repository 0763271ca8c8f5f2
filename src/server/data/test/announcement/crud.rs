use super::*;

/// Tests posting, editing, and deleting an announcement.
///
/// Expected: full lifecycle round trip
#[tokio::test]
async fn announcement_lifecycle() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let admin = factory::create_user(db, location.id).await?;

    let repo = AnnouncementRepository::new(db);

    let created = repo
        .create(CreateAnnouncementParam {
            location_id: location.id,
            created_by: admin.id,
            title: "Kitchen closed".to_string(),
            body: "Renovations on Friday".to_string(),
        })
        .await?;

    let updated = repo
        .update(UpdateAnnouncementParam {
            id: created.id,
            title: "Kitchen closed Friday".to_string(),
            body: created.body.clone(),
        })
        .await?
        .unwrap();
    assert_eq!(updated.title, "Kitchen closed Friday");

    repo.delete(created.id).await?;
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests the paginated feed ordering.
///
/// Expected: newest announcement first, scoped to the location
#[tokio::test]
async fn feed_is_newest_first_and_scoped() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let here = factory::create_location(db).await?;
    let elsewhere = factory::create_location(db).await?;
    let admin = factory::create_user(db, here.id).await?;
    let other_admin = factory::create_user(db, elsewhere.id).await?;

    factory::create_announcement(db, here.id, admin.id).await?;
    let newer = factory::create_announcement(db, here.id, admin.id).await?;
    factory::create_announcement(db, elsewhere.id, other_admin.id).await?;

    let repo = AnnouncementRepository::new(db);
    let (feed, total) = repo.get_paginated(here.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(feed[0].id, newer.id);

    Ok(())
}
