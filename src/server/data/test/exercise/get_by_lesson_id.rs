use super::*;

/// Tests listing a lesson's exercises.
///
/// Verifies ordering by position with ties broken by ID, and that exercises of other
/// lessons are excluded.
///
/// Expected: Ok with each exercise of the lesson exactly once, in order
#[tokio::test]
async fn orders_by_position_then_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let other_lesson = factory::create_lesson(db, user.id).await?;

    let late = factory::exercise::ExerciseFactory::new(db, lesson.id)
        .position(2)
        .build()
        .await?;
    let tie_first = factory::exercise::ExerciseFactory::new(db, lesson.id)
        .position(1)
        .build()
        .await?;
    let tie_second = factory::exercise::ExerciseFactory::new(db, lesson.id)
        .position(1)
        .build()
        .await?;
    factory::create_exercise(db, other_lesson.id).await?;

    let exercises = ExerciseRepository::new(db)
        .get_by_lesson_id(lesson.id)
        .await?;

    let ids: Vec<i32> = exercises.iter().map(|exercise| exercise.id).collect();
    assert_eq!(ids, vec![tie_first.id, tie_second.id, late.id]);

    Ok(())
}

/// Tests listing a lesson with no exercises.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_lesson_without_exercises() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;

    let exercises = ExerciseRepository::new(db)
        .get_by_lesson_id(lesson.id)
        .await?;

    assert!(exercises.is_empty());

    Ok(())
}
