use super::*;

/// Tests reading chat history backwards with a cursor.
///
/// Verifies that pages come newest first and that `before` excludes the cursor message and
/// everything newer.
///
/// Expected: two pages covering all four messages without overlap
#[tokio::test]
async fn pages_backwards_with_cursor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, room) = factory::helpers::create_room_with_owner(db, "public").await?;

    let repo = RoomMessageRepository::new(db);
    let mut sent = Vec::new();
    for i in 0..4 {
        sent.push(
            repo.create(room.id, owner.id, format!("message {}", i))
                .await?,
        );
    }

    let newest = repo.get_page(room.id, None, 2).await?;
    let cursor = newest.last().map(|message| message.id);
    let older = repo.get_page(room.id, cursor, 2).await?;

    let newest_ids: Vec<i32> = newest.iter().map(|message| message.id).collect();
    let older_ids: Vec<i32> = older.iter().map(|message| message.id).collect();
    assert_eq!(newest_ids, vec![sent[3].id, sent[2].id]);
    assert_eq!(older_ids, vec![sent[1].id, sent[0].id]);

    Ok(())
}
