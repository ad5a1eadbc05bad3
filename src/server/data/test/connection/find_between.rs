use super::*;

/// Tests looking up edges between two users regardless of direction.
///
/// Verifies that an edge requested by either side is found and that edges with third
/// parties are ignored.
///
/// Expected: Ok with the single edge between the pair
#[tokio::test]
async fn finds_edge_in_either_direction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;
    let edge = factory::create_connection(db, bob.id, alice.id).await?;
    factory::create_connection(db, alice.id, carol.id).await?;

    let repo = ConnectionRepository::new(db);
    let forward = repo.find_between(alice.id, bob.id).await?;
    let backward = repo.find_between(bob.id, alice.id).await?;

    assert_eq!(forward.len(), 1);
    assert_eq!(forward[0].id, edge.id);
    assert_eq!(backward, forward);

    Ok(())
}

/// Tests looking up edges between strangers.
///
/// Expected: Ok with no edges
#[tokio::test]
async fn returns_empty_for_strangers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = ConnectionRepository::new(db);
    let edges = repo.find_between(alice.id, bob.id).await?;

    assert!(edges.is_empty());

    Ok(())
}
