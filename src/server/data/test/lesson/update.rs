use super::*;

/// Tests a partial update of an owned lesson.
///
/// Verifies that only the provided fields change and the rest are kept.
///
/// Expected: Ok(Some(lesson)) with the new title and the old description
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lesson = factory::lesson::LessonFactory::new(db, user.id)
        .title("Old title")
        .description(Some("Kept".to_string()))
        .build()
        .await?;

    let repo = LessonRepository::new(db);
    let updated = repo
        .update(
            lesson.id,
            user.id,
            UpdateLessonParams {
                title: Some("New title".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.description.as_deref(), Some("Kept"));
    assert!(updated.updated_at >= lesson.updated_at);

    Ok(())
}

/// Tests updating a lesson owned by someone else.
///
/// Verifies that the owner filter hides the lesson and nothing is written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_users_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = LessonRepository::new(db);
    let result = repo
        .update(
            lesson.id,
            stranger.id,
            UpdateLessonParams {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let db_lesson = entity::prelude::Lesson::find_by_id(lesson.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_lesson.title, lesson.title);

    Ok(())
}
