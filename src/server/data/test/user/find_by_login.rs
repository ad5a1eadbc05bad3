use super::*;

/// Tests signing in by username or by email.
///
/// Verifies that email matching ignores the case of the input.
///
/// Expected: the same user for both logins, None for an unknown login
#[tokio::test]
async fn finds_by_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("grace")
        .email("grace@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let by_username = repo.find_by_login("grace").await?;
    let by_email = repo.find_by_login("Grace@Example.com").await?;
    let unknown = repo.find_by_login("nobody").await?;

    assert_eq!(by_username.map(|user| user.id), Some(user.id));
    assert_eq!(by_email.map(|user| user.id), Some(user.id));
    assert!(unknown.is_none());

    Ok(())
}
