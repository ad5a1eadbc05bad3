use super::*;
use crate::server::{
    data::connection::ConnectionRepository, model::connection::ConnectionStatus,
    service::connection::ConnectionService,
};

/// Tests sending a connection request.
///
/// Verifies that a pending edge is created and the addressee receives both a stored
/// notification and a live `connection:request` event.
///
/// Expected: Ok with a pending edge
#[tokio::test]
async fn request_notifies_addressee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let requester = factory::create_user(db).await?;
    let addressee = factory::create_user(db).await?;

    let hub = Hub::new();
    let mut registration = hub.register(addressee.id).await;

    let connection = ConnectionService::new(db, &hub)
        .request(requester.id, addressee.id)
        .await?;

    assert_eq!(connection.status, ConnectionStatus::Pending);
    assert_eq!(connection.requester_id, requester.id);

    let events = drain_events(&mut registration.receiver);
    assert!(events.contains(&event::NOTIFICATION_NEW.to_string()));
    assert!(events.contains(&event::CONNECTION_REQUEST.to_string()));

    Ok(())
}

/// Tests requesting a connection with yourself.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn request_to_self_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let hub = Hub::new();
    let result = ConnectionService::new(db, &hub)
        .request(user.id, user.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests requesting twice in the same direction.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn duplicate_request_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let requester = factory::create_user(db).await?;
    let addressee = factory::create_user(db).await?;
    factory::create_connection(db, requester.id, addressee.id).await?;

    let hub = Hub::new();
    let result = ConnectionService::new(db, &hub)
        .request(requester.id, addressee.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests requesting a user who already sent you a pending request.
///
/// Verifies that the existing edge is accepted instead of creating a second one and that
/// the original requester is told.
///
/// Expected: Ok with the original edge accepted
#[tokio::test]
async fn reverse_request_accepts_pending_edge() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let pending = factory::create_connection(db, first.id, second.id).await?;

    let hub = Hub::new();
    let mut registration = hub.register(first.id).await;

    let connection = ConnectionService::new(db, &hub)
        .request(second.id, first.id)
        .await?;

    assert_eq!(connection.id, pending.id);
    assert_eq!(connection.status, ConnectionStatus::Accepted);

    let edges = ConnectionRepository::new(db)
        .find_between(first.id, second.id)
        .await?;
    assert_eq!(edges.len(), 1);

    let events = drain_events(&mut registration.receiver);
    assert!(events.contains(&event::CONNECTION_ACCEPTED.to_string()));

    Ok(())
}

/// Tests re-requesting after a rejection.
///
/// Verifies that the rejected edge is reused and its direction follows the new requester.
///
/// Expected: Ok with the same edge pending from the new requester
#[tokio::test]
async fn rejected_edge_can_be_requested_again() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let rejected = factory::connection::ConnectionFactory::new(db, first.id, second.id)
        .status("rejected")
        .build()
        .await?;

    let hub = Hub::new();
    let connection = ConnectionService::new(db, &hub)
        .request(second.id, first.id)
        .await?;

    assert_eq!(connection.id, rejected.id);
    assert_eq!(connection.status, ConnectionStatus::Pending);
    assert_eq!(connection.requester_id, second.id);
    assert_eq!(connection.addressee_id, first.id);

    Ok(())
}

/// Tests requesting a user behind a block.
///
/// Verifies that neither side of a blocked edge can send a request.
///
/// Expected: Err(AuthError::AccessDenied) for both users
#[tokio::test]
async fn blocked_users_cannot_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let blocker = factory::create_user(db).await?;
    let blocked = factory::create_user(db).await?;
    factory::connection::ConnectionFactory::new(db, blocker.id, blocked.id)
        .status("blocked")
        .build()
        .await?;

    let hub = Hub::new();
    let service = ConnectionService::new(db, &hub);

    let from_blocked = service.request(blocked.id, blocker.id).await;
    let from_blocker = service.request(blocker.id, blocked.id).await;

    assert!(matches!(
        from_blocked,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        from_blocker,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that only the addressee may accept a request.
///
/// Expected: AccessDenied for the requester, NotFound for an outsider, Ok for the addressee
#[tokio::test]
async fn accept_requires_addressee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let requester = factory::create_user(db).await?;
    let addressee = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let pending = factory::create_connection(db, requester.id, addressee.id).await?;

    let hub = Hub::new();
    let service = ConnectionService::new(db, &hub);

    let by_requester = service.accept(pending.id, requester.id).await;
    let by_outsider = service.accept(pending.id, outsider.id).await;
    let by_addressee = service.accept(pending.id, addressee.id).await?;

    assert!(matches!(
        by_requester,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(by_outsider, Err(AppError::NotFound(_))));
    assert_eq!(by_addressee.status, ConnectionStatus::Accepted);

    Ok(())
}

/// Tests answering a request that is no longer pending.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn reject_after_accept_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, addressee, connection) = factory::helpers::create_friends(db).await?;

    let hub = Hub::new();
    let result = ConnectionService::new(db, &hub)
        .reject(connection.id, addressee.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests blocking a friend.
///
/// Verifies that the existing edge becomes a block owned by the caller.
///
/// Expected: Ok with a blocked edge from the caller and no longer listed as a friend
#[tokio::test]
async fn block_rewrites_existing_edge() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (requester, addressee, connection) = factory::helpers::create_friends(db).await?;

    let hub = Hub::new();
    let service = ConnectionService::new(db, &hub);
    let blocked = service.block(addressee.id, requester.id).await?;

    assert_eq!(blocked.id, connection.id);
    assert_eq!(blocked.status, ConnectionStatus::Blocked);
    assert_eq!(blocked.requester_id, addressee.id);
    assert!(service.friends(requester.id).await?.is_empty());

    Ok(())
}

/// Tests removing a block.
///
/// Verifies that only the user who placed the block can delete the edge.
///
/// Expected: AccessDenied for the blocked user, Ok for the blocker
#[tokio::test]
async fn only_blocker_removes_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let blocker = factory::create_user(db).await?;
    let blocked = factory::create_user(db).await?;

    let hub = Hub::new();
    let service = ConnectionService::new(db, &hub);
    let edge = service.block(blocker.id, blocked.id).await?;

    let by_blocked = service.remove(edge.id, blocked.id).await;
    assert!(matches!(
        by_blocked,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.remove(edge.id, blocker.id).await?;
    assert!(ConnectionRepository::new(db)
        .find_by_id(edge.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that accepting a request moves it out of the request lists.
///
/// Verifies that the edge shows as incoming for the addressee and outgoing for the
/// requester while pending, then only as a friendship on both sides once accepted.
///
/// Expected: empty request lists and one friend each after accept
#[tokio::test]
async fn accepted_request_leaves_request_lists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let requester = factory::create_user(db).await?;
    let addressee = factory::create_user(db).await?;

    let hub = Hub::new();
    let service = ConnectionService::new(db, &hub);
    let pending = service.request(requester.id, addressee.id).await?;

    let incoming = service.incoming(addressee.id).await?;
    let outgoing = service.outgoing(requester.id).await?;
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].connection.id, pending.id);
    assert_eq!(incoming[0].user.id, requester.id);
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].user.id, addressee.id);

    service.accept(pending.id, addressee.id).await?;

    assert!(service.incoming(addressee.id).await?.is_empty());
    assert!(service.outgoing(requester.id).await?.is_empty());

    let requester_friends = service.friends(requester.id).await?;
    let addressee_friends = service.friends(addressee.id).await?;
    assert_eq!(requester_friends.len(), 1);
    assert_eq!(requester_friends[0].user.id, addressee.id);
    assert_eq!(addressee_friends.len(), 1);
    assert_eq!(addressee_friends[0].user.id, requester.id);

    Ok(())
}
