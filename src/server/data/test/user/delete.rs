use super::*;

/// Tests deleting a user row.
///
/// Expected: user is gone afterwards; deleting again is a no-op
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let user = factory::create_user(db, location.id).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    assert!(repo.find_by_id(user.id).await?.is_none());

    // Idempotent
    repo.delete(user.id).await?;

    Ok(())
}
