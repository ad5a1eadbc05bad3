use super::*;

/// Tests accepting a pending edge without changing direction.
///
/// Expected: Ok with status accepted and the original requester kept
#[tokio::test]
async fn updates_status_keeping_direction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let edge = factory::create_connection(db, alice.id, bob.id).await?;

    let repo = ConnectionRepository::new(db);
    let updated = repo
        .update_status(edge.id, ConnectionStatus::Accepted, None)
        .await?;

    assert_eq!(updated.status, ConnectionStatus::Accepted);
    assert_eq!(updated.requester_id, alice.id);
    assert_eq!(updated.addressee_id, bob.id);
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Tests re-pointing an edge when the other side blocks.
///
/// Verifies that the direction is rewritten so the blocker becomes the requester.
///
/// Expected: Ok with status blocked and requester/addressee swapped
#[tokio::test]
async fn rewrites_direction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let edge = factory::create_connection(db, alice.id, bob.id).await?;

    let repo = ConnectionRepository::new(db);
    let updated = repo
        .update_status(edge.id, ConnectionStatus::Blocked, Some((bob.id, alice.id)))
        .await?;

    assert_eq!(updated.status, ConnectionStatus::Blocked);
    assert_eq!(updated.requester_id, bob.id);
    assert_eq!(updated.addressee_id, alice.id);

    Ok(())
}
