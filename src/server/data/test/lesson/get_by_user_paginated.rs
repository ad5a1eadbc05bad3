use super::*;

/// Tests paging through a user's lessons.
///
/// Verifies that only the user's own lessons are counted and that the page size is
/// respected.
///
/// Expected: Ok with 2 items on the first page and a total of 3
#[tokio::test]
async fn paginates_only_own_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_lesson(db, user.id).await?;
    }
    factory::create_lesson(db, other.id).await?;

    let repo = LessonRepository::new(db);
    let (first_page, total) = repo.get_by_user_paginated(user.id, 0, 2).await?;
    let (second_page, _) = repo.get_by_user_paginated(user.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    assert!(first_page
        .iter()
        .chain(second_page.iter())
        .all(|lesson| lesson.user_id == user.id));

    Ok(())
}
