use super::*;

/// Tests which rooms a user can list.
///
/// Verifies that every public room is visible, private rooms only when the user is a
/// member, and that the total matches.
///
/// Expected: the public room and the private room the user belongs to
#[tokio::test]
async fn lists_public_and_member_private_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, public_room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let (_, joined_private) = factory::helpers::create_room_with_owner(db, "private").await?;
    factory::helpers::create_room_with_owner(db, "private").await?;
    let user = factory::create_user(db).await?;
    factory::create_room_member(db, joined_private.id, user.id).await?;

    let member_room_ids = RoomMemberRepository::new(db)
        .get_room_ids_for_user(user.id)
        .await?;
    let (rooms, total) = RoomRepository::new(db)
        .get_visible_paginated(member_room_ids, 0, 20)
        .await?;

    let mut ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();
    ids.sort_unstable();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![public_room.id, joined_private.id]);

    Ok(())
}

/// Tests listing rooms for a user with no memberships.
///
/// Expected: only public rooms
#[tokio::test]
async fn hides_private_rooms_from_non_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_room_with_owner(db, "private").await?;
    let (_, public_room) = factory::helpers::create_room_with_owner(db, "public").await?;

    let (rooms, total) = RoomRepository::new(db)
        .get_visible_paginated(Vec::new(), 0, 20)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rooms[0].id, public_room.id);

    Ok(())
}
