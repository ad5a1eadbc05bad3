use super::*;

/// Tests creating a lesson with optional fields.
///
/// Verifies that the repository stores the title, description and notes and sets
/// matching created/updated timestamps.
///
/// Expected: Ok with lesson persisted
#[tokio::test]
async fn creates_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = LessonRepository::new(db);
    let lesson = repo
        .create(CreateLessonParams {
            user_id: user.id,
            title: "Organic Chemistry".to_string(),
            description: Some("Week 3".to_string()),
            notes: None,
        })
        .await?;

    assert_eq!(lesson.user_id, user.id);
    assert_eq!(lesson.title, "Organic Chemistry");
    assert_eq!(lesson.description.as_deref(), Some("Week 3"));
    assert!(lesson.notes.is_none());
    assert_eq!(lesson.created_at, lesson.updated_at);

    let db_lesson = entity::prelude::Lesson::find_by_id(lesson.id)
        .one(db)
        .await?;
    assert!(db_lesson.is_some());

    Ok(())
}
