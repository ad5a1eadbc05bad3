use super::*;

/// Tests that reacting again replaces the earlier reaction.
///
/// Verifies that a user holds at most one reaction per post and the tallies follow the
/// latest kind.
///
/// Expected: one `love` reaction and no `like`
#[tokio::test]
async fn replaces_previous_reaction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = ReactionRepository::new(db);
    repo.upsert(post.id, reader.id, ReactionKind::Like).await?;
    repo.upsert(post.id, reader.id, ReactionKind::Love).await?;

    let counts = repo.count_by_post_id(post.id).await?;
    assert_eq!(counts.like, 0);
    assert_eq!(counts.love, 1);
    assert_eq!(
        repo.find_kind(post.id, reader.id).await?,
        Some(ReactionKind::Love)
    );

    Ok(())
}

/// Tests clearing a reaction.
///
/// Expected: Ok(true) once, then Ok(false), with no reaction left
#[tokio::test]
async fn deletes_reaction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = ReactionRepository::new(db);
    repo.upsert(post.id, author.id, ReactionKind::Funny).await?;

    assert!(repo.delete(post.id, author.id).await?);
    assert!(!repo.delete(post.id, author.id).await?);
    assert!(repo.find_kind(post.id, author.id).await?.is_none());

    Ok(())
}
