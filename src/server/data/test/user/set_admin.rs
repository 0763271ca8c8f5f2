use super::*;

/// Tests granting and revoking admin privileges.
///
/// Expected: admin flag reflects the last set_admin call
#[tokio::test]
async fn grants_and_revokes_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let user = factory::create_user(db, location.id).await?;
    assert!(!user.admin);

    let repo = UserRepository::new(db);

    repo.set_admin(user.id, true).await?;
    assert!(repo.find_by_id(user.id).await?.unwrap().admin);

    repo.set_admin(user.id, false).await?;
    assert!(!repo.find_by_id(user.id).await?.unwrap().admin);

    Ok(())
}
