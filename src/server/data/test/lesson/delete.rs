use super::*;

/// Tests deleting an owned lesson.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_owned_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, lesson) = factory::helpers::create_lesson_with_owner(db).await?;

    let repo = LessonRepository::new(db);
    let deleted = repo.delete(lesson.id, owner.id).await?;

    assert!(deleted);
    let db_lesson = entity::prelude::Lesson::find_by_id(lesson.id)
        .one(db)
        .await?;
    assert!(db_lesson.is_none());

    Ok(())
}

/// Tests deleting another user's lesson.
///
/// Expected: Ok(false) and the row is kept
#[tokio::test]
async fn does_not_delete_other_users_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = LessonRepository::new(db);
    let deleted = repo.delete(lesson.id, stranger.id).await?;

    assert!(!deleted);
    let db_lesson = entity::prelude::Lesson::find_by_id(lesson.id)
        .one(db)
        .await?;
    assert!(db_lesson.is_some());

    Ok(())
}
