use super::*;

/// Tests renaming an existing character.
///
/// Expected: Ok(true) with the name changed and progress untouched
#[tokio::test]
async fn renames_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::character::CharacterFactory::new(db, user.id)
        .level(4)
        .exp(17)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let updated = repo.update_name(user.id, "Sage".to_string()).await?;

    assert!(updated);
    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.name, "Sage");
    assert_eq!((stored.level, stored.exp), (4, 17));

    Ok(())
}

/// Tests renaming when the user has no character row.
///
/// Expected: Ok(false) and no row is created
#[tokio::test]
async fn returns_false_without_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    let updated = repo.update_name(user.id, "Sage".to_string()).await?;

    assert!(!updated);
    assert!(repo.find_by_user_id(user.id).await?.is_none());

    Ok(())
}
