use super::*;

/// Tests opening a first access request.
///
/// Expected: Ok with a pending request and no decision time
#[tokio::test]
async fn opens_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let user = factory::create_user(db).await?;

    let repo = AccessRequestRepository::new(db);
    let request = repo.open(room.id, user.id).await?;

    assert_eq!(request.status, AccessRequestStatus::Pending);
    assert!(request.decided_at.is_none());
    assert_eq!(repo.get_pending_by_room_id(room.id).await?.len(), 1);

    Ok(())
}

/// Tests asking again after being denied.
///
/// Verifies that the earlier row is reused and reset to pending instead of inserting a
/// second request for the same room and user.
///
/// Expected: Ok with the same request ID, pending again
#[tokio::test]
async fn reopens_denied_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let user = factory::create_user(db).await?;

    let repo = AccessRequestRepository::new(db);
    let first = repo.open(room.id, user.id).await?;
    let denied = repo.decide(first.id, AccessRequestStatus::Denied).await?;
    assert_eq!(denied.status, AccessRequestStatus::Denied);
    assert!(denied.decided_at.is_some());

    let reopened = repo.open(room.id, user.id).await?;

    assert_eq!(reopened.id, first.id);
    assert_eq!(reopened.status, AccessRequestStatus::Pending);
    assert!(reopened.decided_at.is_none());

    Ok(())
}
