use super::*;

/// Tests marking one notification read.
///
/// Expected: Ok(Some) with is_read set
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(notification.id, user.id).await?;

    assert!(updated.is_some_and(|notification| notification.is_read));
    assert_eq!(repo.count_unread(user.id).await?, 0);

    Ok(())
}

/// Tests marking another user's notification read.
///
/// Expected: Ok(None) and the notification stays unread
#[tokio::test]
async fn ignores_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(notification.id, stranger.id).await?;

    assert!(updated.is_none());
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    Ok(())
}

/// Tests marking the whole inbox read.
///
/// Expected: Ok with the number of rows changed, other users untouched
#[tokio::test]
async fn marks_all_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_all_read(user.id).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.count_unread(user.id).await?, 0);
    assert_eq!(repo.count_unread(other.id).await?, 1);

    Ok(())
}
