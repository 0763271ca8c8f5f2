use super::*;

fn param(location_id: i32, email: &str) -> CreateUserParam {
    CreateUserParam {
        location_id,
        name: "Alice".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$test".to_string(),
        diet: DietPreference::Vegetarian,
        birthday: None,
        admin: false,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository inserts a user with the given identity and
/// diet, and that the returned domain model reflects the stored values.
///
/// Expected: Ok with user created and admin status false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(param(location.id, "alice@example.com"))
        .await
        .unwrap();

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.diet, DietPreference::Vegetarian);
    assert_eq!(user.location_id, location.id);
    assert!(!user.admin);

    Ok(())
}

/// Tests the unique index on email.
///
/// Verifies that registering the same email twice fails at the database
/// level even if the service-level check were bypassed.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = UserRepository::new(db);
    repo.create(param(location.id, "dup@example.com")).await?;

    let result = repo.create(param(location.id, "dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the email existence check used during registration.
///
/// Expected: true for a registered address, false otherwise
#[tokio::test]
async fn email_exists_reflects_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = UserRepository::new(db);
    repo.create(param(location.id, "known@example.com")).await?;

    assert!(repo.email_exists("known@example.com").await?);
    assert!(!repo.email_exists("unknown@example.com").await?);

    Ok(())
}
