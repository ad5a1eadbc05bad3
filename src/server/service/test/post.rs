use super::*;
use crate::server::{model::post::ReactionKind, service::post::PostService};

/// Tests replacing a reaction.
///
/// Verifies that a user holds at most one reaction per post and that switching kinds
/// moves the count.
///
/// Expected: Ok with one `love` and no `like`
#[tokio::test]
async fn reaction_replaces_previous_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let hub = Hub::new();
    let service = PostService::new(db, &hub);

    service.set_reaction(post.id, reader.id, "like").await?;
    let view = service.set_reaction(post.id, reader.id, "love").await?;

    assert_eq!(view.reactions.like, 0);
    assert_eq!(view.reactions.love, 1);
    assert_eq!(view.my_reaction, Some(ReactionKind::Love));

    let cleared = service.clear_reaction(post.id, reader.id).await?;
    assert_eq!(cleared.reactions.love, 0);
    assert!(cleared.my_reaction.is_none());

    Ok(())
}

/// Tests reacting with an unknown kind.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn unknown_reaction_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let hub = Hub::new();
    let result = PostService::new(db, &hub)
        .set_reaction(post.id, author.id, "angry")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests commenting on someone else's post.
///
/// Verifies that the post author is notified live, while commenting on your own post
/// sends nothing.
///
/// Expected: One `notification:new` event for the post author
#[tokio::test]
async fn comment_notifies_post_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let hub = Hub::new();
    let mut registration = hub.register(author.id).await;
    let service = PostService::new(db, &hub);

    let comment = service
        .add_comment(post.id, reader.id, "  Nice notes  ")
        .await?;
    service.add_comment(post.id, author.id, "Thanks").await?;

    assert_eq!(comment.body, "Nice notes");
    assert_eq!(
        drain_events(&mut registration.receiver),
        vec![event::NOTIFICATION_NEW.to_string()]
    );

    let view = service.get(post.id, reader.id).await?;
    assert_eq!(view.comment_count, 2);

    Ok(())
}

/// Tests who may delete a comment.
///
/// Verifies that the post author can remove a reader's comment while a third user
/// cannot.
///
/// Expected: AccessDenied for the third user, Ok for the post author
#[tokio::test]
async fn delete_comment_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let comment = factory::create_comment(db, post.id, reader.id, "First").await?;

    let hub = Hub::new();
    let service = PostService::new(db, &hub);

    let by_stranger = service.delete_comment(comment.id, stranger.id).await;
    assert!(matches!(
        by_stranger,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.delete_comment(comment.id, author.id).await?;
    assert!(service.comments(post.id).await?.is_empty());

    Ok(())
}

/// Tests editing a post written by someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn update_requires_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let hub = Hub::new();
    let result = PostService::new(db, &hub)
        .update(post.id, stranger.id, Default::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
