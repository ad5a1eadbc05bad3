use super::*;

/// Tests filtering the inbox to unread notifications.
///
/// Expected: only unread rows are returned and counted
#[tokio::test]
async fn filters_unread_only() -> Result<(), DbErr> {
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
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (all, all_total) = repo.get_paginated(user.id, false, 0, 20).await?;
    let (unread, unread_total) = repo.get_paginated(user.id, true, 0, 20).await?;

    assert_eq!(all_total, 3);
    assert_eq!(all.len(), 3);
    assert_eq!(unread_total, 2);
    assert!(unread.iter().all(|notification| !notification.is_read));

    Ok(())
}
