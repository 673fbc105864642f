use super::*;

fn gain(new_level: i32, new_exp: i64) -> ExperienceGain {
    ExperienceGain {
        level_up_occurred: false,
        levels_gained: 0,
        new_level,
        new_exp,
    }
}

/// Tests updating progress when the stored values match the read values.
///
/// Expected: Ok(true) with new level and exp persisted
#[tokio::test]
async fn updates_when_unchanged_since_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::character::CharacterFactory::new(db, user.id)
        .level(2)
        .exp(40)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let updated = repo.update_progress(user.id, 2, 40, &gain(3, 5)).await?;

    assert!(updated);

    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.level, 3);
    assert_eq!(stored.exp, 5);

    Ok(())
}

/// Tests that a stale read does not overwrite newer progress.
///
/// Expected: Ok(false) and stored values untouched
#[tokio::test]
async fn skips_update_when_progress_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::character::CharacterFactory::new(db, user.id)
        .level(2)
        .exp(70)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let updated = repo.update_progress(user.id, 2, 40, &gain(2, 60)).await?;

    assert!(!updated);

    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.level, 2);
    assert_eq!(stored.exp, 70);

    Ok(())
}
