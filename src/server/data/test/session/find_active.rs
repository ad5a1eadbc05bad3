use super::*;

/// Tests resolving a live session by its token digest.
///
/// Expected: Some before expiry, None once `now` passes `expires_at`
#[tokio::test]
async fn finds_session_until_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let expires_at = now + Duration::hours(1);

    let repo = SessionRepository::new(db);
    repo.create(user.id, "digest".to_string(), expires_at)
        .await?;

    let live = repo.find_active("digest", now).await?;
    let expired = repo.find_active("digest", expires_at).await?;
    let unknown = repo.find_active("other", now).await?;

    assert_eq!(live.map(|session| session.user_id), Some(user.id));
    assert!(expired.is_none());
    assert!(unknown.is_none());

    Ok(())
}

/// Tests logging out by deleting the session.
///
/// Expected: Ok(true) then the session no longer resolves
#[tokio::test]
async fn deletes_session_by_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = SessionRepository::new(db);
    repo.create(
        user.id,
        "digest".to_string(),
        Utc::now() + Duration::hours(1),
    )
    .await?;

    assert!(repo.delete_by_hash("digest").await?);
    assert!(!repo.delete_by_hash("digest").await?);
    assert!(repo.find_active("digest", Utc::now()).await?.is_none());

    Ok(())
}
