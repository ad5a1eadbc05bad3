use super::*;

/// Tests purging expired sessions.
///
/// Expected: only the expired session is deleted
#[tokio::test]
async fn deletes_only_expired_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = SessionRepository::new(db);
    repo.create(user.id, "expired".to_string(), now - Duration::minutes(1))
        .await?;
    repo.create(user.id, "live".to_string(), now + Duration::hours(1))
        .await?;

    let purged = repo.delete_expired(now).await?;

    assert_eq!(purged, 1);
    assert!(repo.find_active("live", now).await?.is_some());

    Ok(())
}
