use super::*;

/// Tests listing a user's friends.
///
/// Verifies that accepted edges in both directions count and pending or blocked edges
/// do not.
///
/// Expected: friend IDs of the two accepted edges
#[tokio::test]
async fn lists_accepted_edges_in_both_directions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let requested_by_user = factory::create_user(db).await?;
    let requested_user = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    let blocked = factory::create_user(db).await?;

    factory::connection::ConnectionFactory::new(db, user.id, requested_by_user.id)
        .status("accepted")
        .build()
        .await?;
    factory::connection::ConnectionFactory::new(db, requested_user.id, user.id)
        .status("accepted")
        .build()
        .await?;
    factory::create_connection(db, pending.id, user.id).await?;
    factory::connection::ConnectionFactory::new(db, user.id, blocked.id)
        .status("blocked")
        .build()
        .await?;

    let repo = ConnectionRepository::new(db);
    let mut friend_ids = repo.get_friend_ids(user.id).await?;
    friend_ids.sort_unstable();

    let mut expected = vec![requested_by_user.id, requested_user.id];
    expected.sort_unstable();
    assert_eq!(friend_ids, expected);

    Ok(())
}
