use super::*;

/// Tests creating a user account.
///
/// Expected: Ok with zero XP and no bio
#[tokio::test]
async fn creates_user_with_zero_xp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
        .await?;

    assert_eq!(user.username, "ada");
    assert_eq!(user.xp, 0);
    assert!(user.bio.is_none());
    assert!(repo.username_exists("ada").await?);
    assert!(repo.email_exists("ada@example.com").await?);
    assert!(!repo.email_exists("grace@example.com").await?);

    Ok(())
}
