//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a lesson owned by that user.
///
/// # Returns
/// - `Ok((user, lesson))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lesson_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::lesson::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let lesson = crate::factory::lesson::create_lesson(db, user.id).await?;

    Ok((user, lesson))
}

/// Creates a user together with a room they own, including the owner membership row.
///
/// # Arguments
/// - `db` - Database connection
/// - `visibility` - `"public"` or `"private"`
///
/// # Returns
/// - `Ok((owner, room))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_owner(
    db: &DatabaseConnection,
    visibility: &str,
) -> Result<(entity::user::Model, entity::room::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let room = crate::factory::room::RoomFactory::new(db, owner.id)
        .visibility(visibility)
        .build()
        .await?;
    crate::factory::room::RoomMemberFactory::new(db, room.id, owner.id)
        .role("owner")
        .build()
        .await?;

    Ok((owner, room))
}

/// Creates two users joined by an accepted connection.
///
/// # Returns
/// - `Ok((requester, addressee, connection))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_friends(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::connection::Model,
    ),
    DbErr,
> {
    let requester = crate::factory::user::create_user(db).await?;
    let addressee = crate::factory::user::create_user(db).await?;
    let connection =
        crate::factory::connection::ConnectionFactory::new(db, requester.id, addressee.id)
            .status("accepted")
            .build()
            .await?;

    Ok((requester, addressee, connection))
}
