use super::*;

/// Tests storing a new notification.
///
/// Expected: Ok with an unread notification of the given kind
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(NotifyParams {
            user_id: user.id,
            kind: kind::CONNECTION_REQUEST,
            title: "New connection request".to_string(),
            body: "Someone wants to connect".to_string(),
            link: Some("/connections".to_string()),
        })
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.kind, kind::CONNECTION_REQUEST);
    assert!(!notification.is_read);
    assert_eq!(repo.count_unread(user.id).await?, 1);

    Ok(())
}
