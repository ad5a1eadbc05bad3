use super::*;

/// Tests that a new card starts with the initial schedule.
///
/// Expected: ease 2.5, interval 0, no repetitions, due now
#[tokio::test]
async fn creates_card_due_immediately() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;

    let repo = FlashcardRepository::new(db);
    let card = repo
        .create(CreateFlashcardParams {
            lesson_id: lesson.id,
            front: "mitochondria".to_string(),
            back: "powerhouse of the cell".to_string(),
        })
        .await?;

    assert_eq!(card.schedule, Schedule::default());
    assert_eq!(card.schedule.repetitions, 0);
    assert!(card.due_at <= Utc::now());

    Ok(())
}
