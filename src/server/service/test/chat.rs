use super::*;
use crate::server::{model::room::MAX_MESSAGE_CHARS, service::room::chat::ChatService};

/// Tests sending a chat message.
///
/// Verifies that the message is stored trimmed and `room:message` reaches every connected
/// member, the sender included, but nobody outside the room.
///
/// Expected: Ok with one `room:message` event per member connection
#[tokio::test]
async fn send_fans_out_to_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let member = factory::create_user(db).await?;
    factory::create_room_member(db, room.id, member.id).await?;
    let outsider = factory::create_user(db).await?;

    let hub = Hub::new();
    let mut owner_conn = hub.register(owner.id).await;
    let mut member_conn = hub.register(member.id).await;
    let mut outsider_conn = hub.register(outsider.id).await;

    let message = ChatService::new(db, &hub)
        .send(room.id, member.id, "  hello room  ")
        .await?;

    assert_eq!(message.content, "hello room");
    assert_eq!(message.sender_id, member.id);

    let expected = vec![event::ROOM_MESSAGE.to_string()];
    assert_eq!(drain_events(&mut owner_conn.receiver), expected);
    assert_eq!(drain_events(&mut member_conn.receiver), expected);
    assert!(drain_events(&mut outsider_conn.receiver).is_empty());

    Ok(())
}

/// Tests the message length bounds.
///
/// Expected: Err(AppError::BadRequest) for blank and overlong content, Ok at the limit
#[tokio::test]
async fn send_enforces_length_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;

    let hub = Hub::new();
    let service = ChatService::new(db, &hub);

    let blank = service.send(room.id, owner.id, "   ").await;
    let too_long = service
        .send(room.id, owner.id, &"a".repeat(MAX_MESSAGE_CHARS + 1))
        .await;

    assert!(matches!(blank, Err(AppError::BadRequest(_))));
    assert!(matches!(too_long, Err(AppError::BadRequest(_))));

    service
        .send(room.id, owner.id, &"a".repeat(MAX_MESSAGE_CHARS))
        .await?;

    Ok(())
}

/// Tests chat access for users outside the room.
///
/// Verifies that a non-member of a public room is refused and a non-member of a private
/// room cannot see it at all, for both sending and reading.
///
/// Expected: AccessDenied for the public room, NotFound for the private room
#[tokio::test]
async fn non_members_cannot_chat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, public_room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let (_, private_room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let outsider = factory::create_user(db).await?;

    let hub = Hub::new();
    let service = ChatService::new(db, &hub);

    assert!(matches!(
        service.send(public_room.id, outsider.id, "hi").await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service
            .messages(public_room.id, outsider.id, None, 10)
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.send(private_room.id, outsider.id, "hi").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .messages(private_room.id, outsider.id, None, 10)
            .await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests paging through history with the `before` cursor.
///
/// Expected: newest first, and each page strictly older than its cursor
#[tokio::test]
async fn messages_page_backwards_from_cursor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;

    let hub = Hub::new();
    let service = ChatService::new(db, &hub);

    let mut sent = Vec::new();
    for i in 0..5 {
        sent.push(
            service
                .send(room.id, owner.id, &format!("message {}", i))
                .await?
                .id,
        );
    }

    let first_page = service.messages(room.id, owner.id, None, 2).await?;
    let first_ids: Vec<i32> = first_page.iter().map(|message| message.id).collect();
    assert_eq!(first_ids, vec![sent[4], sent[3]]);

    let cursor = first_ids[1];
    let second_page = service
        .messages(room.id, owner.id, Some(cursor), 10)
        .await?;
    let second_ids: Vec<i32> = second_page.iter().map(|message| message.id).collect();
    assert_eq!(second_ids, vec![sent[2], sent[1], sent[0]]);
    assert!(second_ids.iter().all(|id| *id < cursor));
    assert!(second_page
        .iter()
        .all(|message| !message.sender_name.is_empty()));

    Ok(())
}

/// Tests typing indicators.
///
/// Verifies that only the other members receive the event and that a non-member's
/// indicator is refused without reaching anyone.
///
/// Expected: `typing:start` for the other member only, AccessDenied for the outsider
#[tokio::test]
async fn typing_reaches_other_members_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let member = factory::create_user(db).await?;
    factory::create_room_member(db, room.id, member.id).await?;
    let outsider = factory::create_user(db).await?;

    let hub = Hub::new();
    let mut owner_conn = hub.register(owner.id).await;
    let mut member_conn = hub.register(member.id).await;
    let service = ChatService::new(db, &hub);

    service.relay_typing(room.id, member.id, true).await?;

    assert_eq!(
        drain_events(&mut owner_conn.receiver),
        vec![event::TYPING_START.to_string()]
    );
    assert!(drain_events(&mut member_conn.receiver).is_empty());

    let result = service.relay_typing(room.id, outsider.id, false).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(drain_events(&mut owner_conn.receiver).is_empty());
    assert!(drain_events(&mut member_conn.receiver).is_empty());

    Ok(())
}
