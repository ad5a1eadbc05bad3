use super::*;

/// Tests that a card is found through its lesson's owner.
///
/// Expected: Some for the owner, None for anyone else
#[tokio::test]
async fn finds_card_only_for_lesson_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;
    let card = factory::create_flashcard(db, lesson.id).await?;

    let repo = FlashcardRepository::new(db);

    assert!(repo.find_owned(card.id, owner.id).await?.is_some());
    assert!(repo.find_owned(card.id, stranger.id).await?.is_none());

    Ok(())
}
