use super::*;

/// Tests adding and finding a membership.
///
/// Expected: Ok with the role stored and the membership found afterwards
#[tokio::test]
async fn adds_and_finds_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let user = factory::create_user(db).await?;

    let repo = RoomMemberRepository::new(db);
    let member = repo.add(room.id, user.id, RoomRole::Member).await?;
    let found = repo.find(room.id, user.id).await?;

    assert_eq!(member.role, RoomRole::Member);
    assert_eq!(found, Some(member));

    Ok(())
}

/// Tests removing a membership.
///
/// Expected: Ok(true) the first time and Ok(false) once the user is gone
#[tokio::test]
async fn removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let user = factory::create_user(db).await?;
    factory::create_room_member(db, room.id, user.id).await?;

    let repo = RoomMemberRepository::new(db);

    assert!(repo.remove(room.id, user.id).await?);
    assert!(!repo.remove(room.id, user.id).await?);
    assert!(repo.find(room.id, user.id).await?.is_none());

    Ok(())
}

/// Tests listing member IDs of a room.
///
/// Expected: the owner and the joined member
#[tokio::test]
async fn lists_member_user_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;
    let user = factory::create_user(db).await?;
    factory::create_room_member(db, room.id, user.id).await?;

    let mut ids = RoomMemberRepository::new(db).get_user_ids(room.id).await?;
    ids.sort_unstable();

    assert_eq!(ids, vec![owner.id, user.id]);

    Ok(())
}
