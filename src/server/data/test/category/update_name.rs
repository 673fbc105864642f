use super::*;

/// Tests renaming an owned category.
///
/// Expected: Ok(true) and the new name is stored
#[tokio::test]
async fn renames_owned_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;

    let repo = StudyCategoryRepository::new(db);
    let updated = repo
        .update_name(UpdateStudyCategoryParams {
            id: category.id,
            user_id: user.id,
            name: "Algorithms".to_string(),
        })
        .await?;

    assert!(updated);
    let stored = repo.find_owned(category.id, user.id).await?.unwrap();
    assert_eq!(stored.name, "Algorithms");

    Ok(())
}

/// Tests renaming another user's category.
///
/// Expected: Ok(false) and the name is unchanged
#[tokio::test]
async fn does_not_rename_foreign_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, category) = factory::helpers::create_user_with_category(db).await?;
    let other = factory::create_user(db).await?;

    let repo = StudyCategoryRepository::new(db);
    let updated = repo
        .update_name(UpdateStudyCategoryParams {
            id: category.id,
            user_id: other.id,
            name: "Hijacked".to_string(),
        })
        .await?;

    assert!(!updated);
    let stored = repo.find_owned(category.id, owner.id).await?.unwrap();
    assert_eq!(stored.name, category.name);

    Ok(())
}
