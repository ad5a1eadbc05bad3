use super::*;

/// Tests fetching due cards across a user's lessons.
///
/// Verifies that cards due in the future and cards in other users' lessons are excluded,
/// and that results are ordered by due date.
///
/// Expected: the two overdue cards, oldest first
#[tokio::test]
async fn returns_due_cards_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (owner, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let (_, other_lesson) = factory::helpers::create_lesson_with_owner(db).await?;

    let recent = factory::flashcard::FlashcardFactory::new(db, lesson.id)
        .due_at(now - Duration::hours(1))
        .build()
        .await?;
    let oldest = factory::flashcard::FlashcardFactory::new(db, lesson.id)
        .due_at(now - Duration::days(2))
        .build()
        .await?;
    factory::flashcard::FlashcardFactory::new(db, lesson.id)
        .due_at(now + Duration::days(1))
        .build()
        .await?;
    factory::flashcard::FlashcardFactory::new(db, other_lesson.id)
        .due_at(now - Duration::days(5))
        .build()
        .await?;

    let repo = FlashcardRepository::new(db);
    let due = repo.get_due(owner.id, now, 10).await?;

    let ids: Vec<i32> = due.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![oldest.id, recent.id]);

    Ok(())
}

/// Tests that the limit caps the number of due cards.
///
/// Expected: exactly `limit` cards
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    for _ in 0..5 {
        factory::create_flashcard(db, lesson.id).await?;
    }

    let repo = FlashcardRepository::new(db);
    let due = repo.get_due(owner.id, Utc::now(), 3).await?;

    assert_eq!(due.len(), 3);

    Ok(())
}
