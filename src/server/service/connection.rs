//! Friend graph state machine.
//!
//! At most one edge exists between two users. Edges move through
//! `pending -> accepted | rejected`, rejected edges can be re-requested, any edge can
//! become `blocked` and either party can delete it.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{connection::ConnectionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        connection::{Connection, ConnectionStatus, ConnectionWithUser},
        notification::{kind, NotifyParams},
        user::User,
    },
    realtime::{event::ServerEvent, hub::Hub},
    service::notification::NotificationService,
};

/// Which end of the edges a listing shows the profile of.
enum Counterpart {
    Requester,
    Addressee,
    Other(i32),
}

pub struct ConnectionService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a Hub,
}

impl<'a> ConnectionService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a Hub) -> Self {
        Self { db, hub }
    }

    /// Sends a connection request from `user_id` to `addressee_id`
    ///
    /// If the addressee already has a pending request to the caller, that request is
    /// accepted instead. A rejected edge is reset to pending with the caller as requester.
    ///
    /// # Returns
    /// - `Ok(Connection)` - The pending (or accepted) edge
    /// - `Err(AppError::BadRequest)` - Request to self
    /// - `Err(AppError::NotFound)` - Addressee does not exist
    /// - `Err(AuthError::AccessDenied)` - Either side blocked the other
    /// - `Err(AppError::Conflict)` - Already connected or already requested
    pub async fn request(&self, user_id: i32, addressee_id: i32) -> Result<Connection, AppError> {
        if user_id == addressee_id {
            return Err(AppError::BadRequest(
                "You cannot connect with yourself".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        let requester = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(user_not_found)?;
        user_repo
            .find_by_id(addressee_id)
            .await?
            .ok_or_else(user_not_found)?;

        let repo = ConnectionRepository::new(self.db);
        let existing = repo.find_between(user_id, addressee_id).await?;

        if existing
            .iter()
            .any(|edge| edge.status == ConnectionStatus::Blocked)
        {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("connection with user {} is blocked", addressee_id),
            )
            .into());
        }

        let connection = match existing.into_iter().next() {
            Some(edge) if edge.status == ConnectionStatus::Accepted => {
                return Err(AppError::Conflict("You are already connected".to_string()));
            }
            Some(edge) if edge.status == ConnectionStatus::Pending => {
                if edge.requester_id == user_id {
                    return Err(AppError::Conflict(
                        "Connection request already sent".to_string(),
                    ));
                }
                return self.accept_edge(edge, &requester).await;
            }
            Some(edge) => {
                repo.update_status(
                    edge.id,
                    ConnectionStatus::Pending,
                    Some((user_id, addressee_id)),
                )
                .await?
            }
            None => {
                repo.create(user_id, addressee_id, ConnectionStatus::Pending)
                    .await?
            }
        };

        tracing::debug!(
            "User {} requested connection {} with user {}",
            user_id,
            connection.id,
            addressee_id
        );

        NotificationService::new(self.db, self.hub)
            .notify(NotifyParams {
                user_id: addressee_id,
                kind: kind::CONNECTION_REQUEST,
                title: "New connection request".to_string(),
                body: format!("{} wants to connect with you", requester.display_name),
                link: Some("/connections".to_string()),
            })
            .await?;

        self.hub
            .emit(
                addressee_id,
                &ServerEvent::connection_request(&connection.clone().into_dto()),
            )
            .await;

        Ok(connection)
    }

    /// Accepts a pending request addressed to `user_id`
    ///
    /// # Returns
    /// - `Ok(Connection)` - The accepted edge
    /// - `Err(AppError::NotFound)` - Edge missing or not involving the caller
    /// - `Err(AuthError::AccessDenied)` - Caller is the requester
    /// - `Err(AppError::Conflict)` - Edge is not pending
    pub async fn accept(&self, id: i32, user_id: i32) -> Result<Connection, AppError> {
        let edge = self.find_pending_for_addressee(id, user_id).await?;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(user_not_found)?;

        self.accept_edge(edge, &user).await
    }

    /// Rejects a pending request addressed to `user_id`
    pub async fn reject(&self, id: i32, user_id: i32) -> Result<Connection, AppError> {
        let edge = self.find_pending_for_addressee(id, user_id).await?;

        ConnectionRepository::new(self.db)
            .update_status(edge.id, ConnectionStatus::Rejected, None)
            .await
    }

    /// Blocks `target_id`, replacing any edge between the two users
    pub async fn block(&self, user_id: i32, target_id: i32) -> Result<Connection, AppError> {
        if user_id == target_id {
            return Err(AppError::BadRequest(
                "You cannot block yourself".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .find_by_id(target_id)
            .await?
            .ok_or_else(user_not_found)?;

        let repo = ConnectionRepository::new(self.db);
        let mut existing = repo.find_between(user_id, target_id).await?.into_iter();

        let connection = match existing.next() {
            Some(edge) => {
                repo.update_status(
                    edge.id,
                    ConnectionStatus::Blocked,
                    Some((user_id, target_id)),
                )
                .await?
            }
            None => {
                repo.create(user_id, target_id, ConnectionStatus::Blocked)
                    .await?
            }
        };

        for stale in existing {
            repo.delete(stale.id).await?;
        }

        tracing::debug!("User {} blocked user {}", user_id, target_id);

        Ok(connection)
    }

    /// Deletes an edge. Only the blocker may remove a block.
    pub async fn remove(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = ConnectionRepository::new(self.db);
        let edge = repo
            .find_by_id(id)
            .await?
            .filter(|edge| edge.involves(user_id))
            .ok_or_else(connection_not_found)?;

        if edge.status == ConnectionStatus::Blocked && edge.requester_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("only the blocker may remove block {}", id),
            )
            .into());
        }

        repo.delete(edge.id).await?;

        Ok(())
    }

    /// Lists accepted connections with the other user's profile
    pub async fn friends(&self, user_id: i32) -> Result<Vec<ConnectionWithUser>, AppError> {
        let edges = ConnectionRepository::new(self.db)
            .get_accepted(user_id)
            .await?;

        self.attach_users(edges, Counterpart::Other(user_id)).await
    }

    /// Lists pending requests addressed to the user with the requester's profile
    pub async fn incoming(&self, user_id: i32) -> Result<Vec<ConnectionWithUser>, AppError> {
        let edges = ConnectionRepository::new(self.db)
            .get_incoming_pending(user_id)
            .await?;

        self.attach_users(edges, Counterpart::Requester).await
    }

    /// Lists pending requests sent by the user with the addressee's profile
    pub async fn outgoing(&self, user_id: i32) -> Result<Vec<ConnectionWithUser>, AppError> {
        let edges = ConnectionRepository::new(self.db)
            .get_outgoing_pending(user_id)
            .await?;

        self.attach_users(edges, Counterpart::Addressee).await
    }

    async fn find_pending_for_addressee(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Connection, AppError> {
        let edge = ConnectionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|edge| edge.involves(user_id))
            .ok_or_else(connection_not_found)?;

        if edge.addressee_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("only the addressee may answer connection {}", id),
            )
            .into());
        }
        if edge.status != ConnectionStatus::Pending {
            return Err(AppError::Conflict(
                "Connection request is no longer pending".to_string(),
            ));
        }

        Ok(edge)
    }

    /// Accepts `edge` on behalf of its addressee and tells the requester.
    async fn accept_edge(
        &self,
        edge: Connection,
        addressee: &User,
    ) -> Result<Connection, AppError> {
        let connection = ConnectionRepository::new(self.db)
            .update_status(edge.id, ConnectionStatus::Accepted, None)
            .await?;

        tracing::debug!(
            "User {} accepted connection {} from user {}",
            addressee.id,
            connection.id,
            connection.requester_id
        );

        NotificationService::new(self.db, self.hub)
            .notify(NotifyParams {
                user_id: connection.requester_id,
                kind: kind::CONNECTION_ACCEPTED,
                title: "Connection accepted".to_string(),
                body: format!(
                    "{} accepted your connection request",
                    addressee.display_name
                ),
                link: Some("/connections".to_string()),
            })
            .await?;

        self.hub
            .emit(
                connection.requester_id,
                &ServerEvent::connection_accepted(&connection.clone().into_dto()),
            )
            .await;

        Ok(connection)
    }

    async fn attach_users(
        &self,
        edges: Vec<Connection>,
        counterpart: Counterpart,
    ) -> Result<Vec<ConnectionWithUser>, AppError> {
        let user_for = |edge: &Connection| match counterpart {
            Counterpart::Requester => edge.requester_id,
            Counterpart::Addressee => edge.addressee_id,
            Counterpart::Other(user_id) => edge.other_party(user_id),
        };

        let user_ids = edges.iter().map(user_for).collect();
        let users: HashMap<i32, User> = UserRepository::new(self.db).find_by_ids(user_ids).await?;

        Ok(edges
            .into_iter()
            .filter_map(|connection| {
                let user = users.get(&user_for(&connection))?.clone();
                Some(ConnectionWithUser { connection, user })
            })
            .collect())
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn connection_not_found() -> AppError {
    AppError::NotFound("Connection not found".to_string())
}
