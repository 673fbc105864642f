use super::*;

/// Tests a grant that stays within the current level.
///
/// Expected: Ok with exp increased and no level-up
#[tokio::test]
async fn adds_exp_within_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::character::CharacterFactory::new(db, user.id)
        .exp(10)
        .build()
        .await?;

    let gain = LevelingService::new(db, LevelCurve::default())
        .apply_experience(user.id, 20)
        .await?;

    assert!(!gain.level_up_occurred);
    assert_eq!(gain.new_exp, 30);

    let stored = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!((stored.level, stored.exp), (1, 30));

    Ok(())
}

/// Tests a grant on a custom curve crossing a threshold.
///
/// Expected: Ok with level 2 and the remainder persisted
#[tokio::test]
async fn levels_up_on_custom_curve() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_character(db, user.id).await?;

    let gain = LevelingService::new(db, LevelCurve::new(10, 5))
        .apply_experience(user.id, 12)
        .await?;

    assert!(gain.level_up_occurred);
    assert_eq!(gain.levels_gained, 1);

    let stored = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!((stored.level, stored.exp), (2, 2));

    Ok(())
}

/// Tests a grant for a user with no character row.
///
/// Expected: Ok and a character named after the user's nickname is created
#[tokio::test]
async fn creates_missing_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .nickname("scholar")
        .build()
        .await?;

    LevelingService::new(db, LevelCurve::default())
        .apply_experience(user.id, 5)
        .await?;

    let stored = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(stored.name, "scholar");
    assert_eq!((stored.level, stored.exp), (1, 5));

    Ok(())
}

/// Tests a grant for a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LevelingService::new(db, LevelCurve::default())
        .apply_experience(404, 5)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
