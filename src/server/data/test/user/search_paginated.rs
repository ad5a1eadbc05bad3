use super::*;

/// Tests searching users by partial username or display name.
///
/// Verifies that the match ignores case and that results are ordered by username.
///
/// Expected: the two matching users in username order
#[tokio::test]
async fn matches_username_and_display_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_username = factory::user::UserFactory::new(db)
        .username("marie_c")
        .display_name("M. Curie")
        .build()
        .await?;
    let by_display_name = factory::user::UserFactory::new(db)
        .username("ada")
        .display_name("Ada Marie")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("grace")
        .display_name("Grace Hopper")
        .build()
        .await?;

    let (users, total) = UserRepository::new(db)
        .search_paginated("MARIE", 0, 20)
        .await?;

    let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![by_display_name.id, by_username.id]);

    Ok(())
}
