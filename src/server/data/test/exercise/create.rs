use super::*;

/// Tests creating a multiple choice exercise.
///
/// Verifies that the options survive the JSON column and the answer key and points are
/// stored as given.
///
/// Expected: Ok with exercise persisted
#[tokio::test]
async fn creates_exercise_with_options() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;

    let exercise = ExerciseRepository::new(db)
        .create(CreateExerciseParams {
            lesson_id: lesson.id,
            exercise_type: ExerciseType::MultipleChoice,
            question: "Largest planet?".to_string(),
            options: vec!["Mars".to_string(), "Jupiter".to_string()],
            correct_answer: Some("Jupiter".to_string()),
            points: 5,
            position: 2,
        })
        .await?;

    assert_eq!(exercise.lesson_id, lesson.id);
    assert_eq!(exercise.exercise_type, ExerciseType::MultipleChoice);
    assert_eq!(exercise.options, vec!["Mars", "Jupiter"]);
    assert_eq!(exercise.correct_answer.as_deref(), Some("Jupiter"));
    assert_eq!(exercise.points, 5);
    assert_eq!(exercise.position, 2);

    let db_exercise = entity::prelude::LessonExercise::find_by_id(exercise.id)
        .one(db)
        .await?;
    assert!(db_exercise.is_some());

    Ok(())
}

/// Tests creating an exercise without options.
///
/// Verifies that an empty option list is stored as NULL and read back as empty.
///
/// Expected: Ok with no options
#[tokio::test]
async fn stores_empty_options_as_null() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;

    let exercise = ExerciseRepository::new(db)
        .create(CreateExerciseParams {
            lesson_id: lesson.id,
            exercise_type: ExerciseType::Essay,
            question: "Describe photosynthesis".to_string(),
            options: Vec::new(),
            correct_answer: None,
            points: 0,
            position: 0,
        })
        .await?;

    assert!(exercise.options.is_empty());

    let db_exercise = entity::prelude::LessonExercise::find_by_id(exercise.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_exercise.options.is_none());

    Ok(())
}
