use super::*;
use crate::server::{
    data::room::{access_request::AccessRequestRepository, member::RoomMemberRepository},
    model::room::{AccessRequestStatus, JoinOutcome, RoomRole},
    service::room::RoomService,
};

/// Tests joining a public room.
///
/// Expected: Ok(JoinOutcome::Joined) and a member row
#[tokio::test]
async fn join_public_room_adds_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let user = factory::create_user(db).await?;

    let hub = Hub::new();
    let outcome = RoomService::new(db, &hub).join(room.id, user.id).await?;

    assert_eq!(outcome, JoinOutcome::Joined);
    let member = RoomMemberRepository::new(db).find(room.id, user.id).await?;
    assert_eq!(member.map(|member| member.role), Some(RoomRole::Member));

    Ok(())
}

/// Tests joining a room you already belong to.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn join_twice_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;

    let hub = Hub::new();
    let result = RoomService::new(db, &hub).join(room.id, owner.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests joining a private room.
///
/// Verifies that a pending access request is opened instead of a membership, the owner
/// is notified, and a second attempt conflicts while the request is pending.
///
/// Expected: Ok(JoinOutcome::Requested) then Err(AppError::Conflict)
#[tokio::test]
async fn join_private_room_opens_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let user = factory::create_user(db).await?;

    let hub = Hub::new();
    let mut registration = hub.register(owner.id).await;
    let service = RoomService::new(db, &hub);

    let outcome = service.join(room.id, user.id).await?;
    let JoinOutcome::Requested(request) = outcome else {
        panic!("expected an access request, got {:?}", outcome);
    };
    assert_eq!(request.status, AccessRequestStatus::Pending);
    assert!(RoomMemberRepository::new(db)
        .find(room.id, user.id)
        .await?
        .is_none());

    let events = drain_events(&mut registration.receiver);
    assert!(events.contains(&event::NOTIFICATION_NEW.to_string()));
    assert!(events.contains(&event::ROOM_ACCESS_REQUESTED.to_string()));

    let again = service.join(room.id, user.id).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests approving an access request.
///
/// Verifies that approval adds the requester as a member and sends them the approval
/// event. Deciding the same request again conflicts.
///
/// Expected: Ok with an approved request, then Err(AppError::Conflict)
#[tokio::test]
async fn approve_request_adds_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let user = factory::create_user(db).await?;
    let request = AccessRequestRepository::new(db)
        .open(room.id, user.id)
        .await?;

    let hub = Hub::new();
    let mut registration = hub.register(user.id).await;
    let service = RoomService::new(db, &hub);

    let decided = service.decide(request.id, owner.id, true).await?;

    assert_eq!(decided.status, AccessRequestStatus::Approved);
    assert!(decided.decided_at.is_some());
    assert!(RoomMemberRepository::new(db)
        .find(room.id, user.id)
        .await?
        .is_some());

    let events = drain_events(&mut registration.receiver);
    assert!(events.contains(&event::ROOM_ACCESS_APPROVED.to_string()));

    let again = service.decide(request.id, owner.id, false).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests denying an access request.
///
/// Expected: Ok with a denied request and no membership
#[tokio::test]
async fn deny_request_keeps_user_out() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let user = factory::create_user(db).await?;
    let request = AccessRequestRepository::new(db)
        .open(room.id, user.id)
        .await?;

    let hub = Hub::new();
    let mut registration = hub.register(user.id).await;

    let decided = RoomService::new(db, &hub)
        .decide(request.id, owner.id, false)
        .await?;

    assert_eq!(decided.status, AccessRequestStatus::Denied);
    assert!(RoomMemberRepository::new(db)
        .find(room.id, user.id)
        .await?
        .is_none());

    let events = drain_events(&mut registration.receiver);
    assert!(events.contains(&event::ROOM_ACCESS_DENIED.to_string()));

    Ok(())
}

/// Tests deciding a request without owning the room.
///
/// Verifies that a plain member is refused and an outsider cannot see the private room.
///
/// Expected: AccessDenied for the member, NotFound for the outsider
#[tokio::test]
async fn decide_requires_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let member = factory::create_user(db).await?;
    factory::create_room_member(db, room.id, member.id).await?;
    let outsider = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    let request = AccessRequestRepository::new(db)
        .open(room.id, requester.id)
        .await?;

    let hub = Hub::new();
    let service = RoomService::new(db, &hub);

    let by_member = service.decide(request.id, member.id, true).await;
    let by_outsider = service.decide(request.id, outsider.id, true).await;

    assert!(matches!(
        by_member,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(by_outsider, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests leaving rooms.
///
/// Verifies that members can leave but the owner cannot.
///
/// Expected: Ok for the member, Err(AppError::BadRequest) for the owner
#[tokio::test]
async fn owner_cannot_leave() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let member = factory::create_user(db).await?;
    factory::create_room_member(db, room.id, member.id).await?;

    let hub = Hub::new();
    let service = RoomService::new(db, &hub);

    service.leave(room.id, member.id).await?;
    let result = service.leave(room.id, owner.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(RoomMemberRepository::new(db)
        .find(room.id, member.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests reading a private room as an outsider.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn private_room_hidden_from_outsiders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, room) = factory::helpers::create_room_with_owner(db, "private").await?;
    let outsider = factory::create_user(db).await?;

    let hub = Hub::new();
    let service = RoomService::new(db, &hub);

    let result = service.get(room.id, outsider.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let access = service.get(room.id, owner.id).await?;
    assert!(access.is_owner());

    Ok(())
}
