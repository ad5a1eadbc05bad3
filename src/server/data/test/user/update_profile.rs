use super::*;

/// Tests updating only the bio.
///
/// Expected: Ok with the bio set and the display name unchanged
#[tokio::test]
async fn updates_bio_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update_profile(
            user.id,
            UpdateProfileParams {
                bio: Some("Studying for finals".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.bio.as_deref(), Some("Studying for finals"));
    assert_eq!(updated.display_name, user.display_name);

    Ok(())
}
