use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;
use crate::server::service::{
    flashcard::{schedule::MAX_INTERVAL_DAYS, FlashcardService},
    user::UserService,
};

/// Tests reviewing a card with a good recall.
///
/// Verifies that the schedule advances, the review is logged and the reviewer earns
/// twice the quality in XP.
///
/// Expected: Ok with a card due one day later and 8 XP awarded
#[tokio::test]
async fn review_reschedules_and_awards_xp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let card = factory::create_flashcard(db, lesson.id).await?;

    let before = Utc::now();
    let reviewed = FlashcardService::new(db)
        .review(card.id, user.id, 4)
        .await?;

    assert_eq!(reviewed.schedule.repetitions, 1);
    assert_eq!(reviewed.schedule.interval_days, 1);
    assert!(reviewed.due_at > before);
    let reviews = entity::prelude::FlashcardReview::find()
        .filter(entity::flashcard_review::Column::FlashcardId.eq(card.id))
        .filter(entity::flashcard_review::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(reviews, 1);

    let profile = UserService::new(db).get_profile(user.id).await?;
    assert_eq!(profile.xp, user.xp + 8);

    Ok(())
}

/// Tests reviewing with a quality outside 1-5.
///
/// Expected: Err(AppError::BadRequest) for 0 and 6
#[tokio::test]
async fn review_rejects_out_of_range_quality() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let card = factory::create_flashcard(db, lesson.id).await?;

    let service = FlashcardService::new(db);

    assert!(matches!(
        service.review(card.id, user.id, 0).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.review(card.id, user.id, 6).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests reviewing someone else's card.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn review_requires_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let card = factory::create_flashcard(db, lesson.id).await?;
    let stranger = factory::create_user(db).await?;

    let result = FlashcardService::new(db)
        .review(card.id, stranger.id, 5)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a lapse sends the card back to a one day interval.
///
/// Expected: Ok with repetitions reset to 0
#[tokio::test]
async fn lapse_resets_repetitions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let card = factory::flashcard::FlashcardFactory::new(db, lesson.id)
        .schedule(2.5, 15, 4)
        .build()
        .await?;

    let reviewed = FlashcardService::new(db)
        .review(card.id, user.id, 2)
        .await?;

    assert_eq!(reviewed.schedule.repetitions, 0);
    assert_eq!(reviewed.schedule.interval_days, 1);

    Ok(())
}

/// Tests reviewing a card that is already scheduled far out.
///
/// Verifies that repeated perfect reviews keep the interval at the ceiling instead of
/// growing without bound.
///
/// Expected: Ok with the interval held at the maximum
#[tokio::test]
async fn long_interval_stays_capped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, lesson) = factory::helpers::create_lesson_with_owner(db).await?;
    let card = factory::flashcard::FlashcardFactory::new(db, lesson.id)
        .schedule(4.0, MAX_INTERVAL_DAYS, 20)
        .build()
        .await?;

    let service = FlashcardService::new(db);
    let mut reviewed = service.review(card.id, user.id, 5).await?;
    for _ in 0..5 {
        reviewed = service.review(card.id, user.id, 5).await?;
    }

    assert_eq!(reviewed.schedule.interval_days, MAX_INTERVAL_DAYS);
    assert_eq!(reviewed.schedule.repetitions, 26);

    Ok(())
}
