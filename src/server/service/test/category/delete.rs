use super::*;

/// Tests deleting an owned category.
///
/// Expected: Ok and the category no longer listed
#[tokio::test]
async fn deletes_owned_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;

    let service = StudyCategoryService::new(db);
    service.delete(category.id, user.id).await?;

    assert!(service.get_for_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests deleting the same category twice.
///
/// Expected: first Ok, second Err(AppError::NotFound)
#[tokio::test]
async fn delete_twice_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;

    let service = StudyCategoryService::new(db);
    service.delete(category.id, user.id).await?;
    let result = service.delete(category.id, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting another user's category.
///
/// Expected: Err(AppError::NotFound) and the owner still has the category
#[tokio::test]
async fn rejects_foreign_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, category) = factory::helpers::create_user_with_category(db).await?;
    let other = factory::create_user(db).await?;

    let service = StudyCategoryService::new(db);
    let result = service.delete(category.id, other.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_for_user(owner.id).await?.len(), 1);

    Ok(())
}
