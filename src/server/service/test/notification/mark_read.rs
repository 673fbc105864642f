use super::*;

/// Tests marking an own notification as read.
///
/// Expected: Ok and the notification is read
#[tokio::test]
async fn marks_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);
    service.mark_read(notification.id, user.id).await?;

    let stored = service.get_for_user(user.id).await?;
    assert!(stored[0].is_read);

    Ok(())
}

/// Tests marking another user's notification.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_foreign_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let result = NotificationService::new(db)
        .mark_read(notification.id, other.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a notification twice.
///
/// Expected: first Ok, second Err(AppError::NotFound)
#[tokio::test]
async fn delete_twice_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);
    service.delete(notification.id, user.id).await?;
    let result = service.delete(notification.id, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests marking all notifications read.
///
/// Expected: Ok with the number of previously unread notifications
#[tokio::test]
async fn marks_all_unread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;

    let changed = NotificationService::new(db).mark_all_read(user.id).await?;

    assert_eq!(changed, 2);

    Ok(())
}
