use super::*;

/// Tests inserting a notification.
///
/// Expected: Ok with an unread notification of the given kind
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            user_id: user.id,
            kind: NotificationKind::LevelUp,
            title: "Level up!".to_string(),
            message: "Your character reached level 2.".to_string(),
        })
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.kind, NotificationKind::LevelUp);
    assert!(!notification.is_read);

    Ok(())
}

/// Tests that stored rows with an unknown kind surface as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .kind("mystery")
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let result = repo.get_by_user(user.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
