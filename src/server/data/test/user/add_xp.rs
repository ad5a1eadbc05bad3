use super::*;

/// Tests awarding XP.
///
/// Expected: Ok with the new running total
#[tokio::test]
async fn adds_to_existing_xp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).xp(90).build().await?;

    let repo = UserRepository::new(db);
    let total = repo.add_xp(user.id, 15).await?;

    assert_eq!(total, 105);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.xp, 105);

    Ok(())
}

/// Tests awarding XP to a missing user.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).add_xp(42, 10).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
