use super::*;

/// Tests storing a new schedule after a review.
///
/// Expected: Ok with every schedule field and the due date replaced
#[tokio::test]
async fn stores_schedule_and_due_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let card = factory::create_flashcard(db, lesson.id).await?;
    let due_at = Utc::now() + Duration::days(6);
    let schedule = Schedule {
        ease_factor: 2.6,
        interval_days: 6,
        repetitions: 2,
    };

    let repo = FlashcardRepository::new(db);
    let updated = repo.update_schedule(card.id, schedule, due_at).await?;

    assert_eq!(updated.schedule, schedule);
    assert_eq!(updated.due_at, due_at);

    Ok(())
}

/// Tests updating the schedule of a missing card.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlashcardRepository::new(db);
    let result = repo
        .update_schedule(999, Schedule::default(), Utc::now())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
