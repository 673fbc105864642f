use super::*;

/// Tests deleting a category that has recorded sessions.
///
/// Expected: Ok(true), the category is gone and its sessions remain with no category
#[tokio::test]
async fn deletes_category_and_keeps_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;
    let session = factory::study_session::StudySessionFactory::new(db, user.id)
        .category_id(Some(category.id))
        .closed_after(600)
        .build()
        .await?;

    let deleted = StudyCategoryRepository::new(db)
        .delete(category.id, user.id)
        .await?;

    assert!(deleted);
    assert!(entity::prelude::StudyCategory::find_by_id(category.id)
        .one(db)
        .await?
        .is_none());

    let stored = entity::prelude::StudySession::find_by_id(session.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.category_id, None);
    assert_eq!(stored.duration, Some(600));

    Ok(())
}

/// Tests deleting another user's category.
///
/// Expected: Ok(false) and the category still exists
#[tokio::test]
async fn does_not_delete_foreign_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, category) = factory::helpers::create_user_with_category(db).await?;
    let other = factory::create_user(db).await?;

    let deleted = StudyCategoryRepository::new(db)
        .delete(category.id, other.id)
        .await?;

    assert!(!deleted);
    assert!(entity::prelude::StudyCategory::find_by_id(category.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let deleted = StudyCategoryRepository::new(db).delete(404, user.id).await?;

    assert!(!deleted);

    Ok(())
}
