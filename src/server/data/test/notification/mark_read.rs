use super::*;

/// Tests marking a single notification as read.
///
/// Expected: Ok(true) and the notification is read
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let marked = repo.mark_read(notification.id, user.id).await?;

    assert!(marked);
    assert!(repo.get_by_user(user.id).await?[0].is_read);

    Ok(())
}

/// Tests that a user cannot mark another user's notification.
///
/// Expected: Ok(false) and the notification stays unread
#[tokio::test]
async fn ignores_foreign_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    let marked = repo.mark_read(notification.id, other.id).await?;

    assert!(!marked);
    assert!(!repo.get_by_user(owner.id).await?[0].is_read);

    Ok(())
}

/// Tests marking all unread notifications of a user.
///
/// Expected: Ok with the count of previously unread notifications
#[tokio::test]
async fn marks_all_unread_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let changed = repo.mark_all_read(user.id).await?;

    assert_eq!(changed, 2);
    assert!(repo.get_by_user(user.id).await?.iter().all(|n| n.is_read));
    assert!(!repo.get_by_user(other.id).await?[0].is_read);

    Ok(())
}
