use super::*;

/// Tests closing an open session.
///
/// Verifies that end time and duration are stored and the open marker is cleared.
///
/// Expected: Ok(true) with closed row
#[tokio::test]
async fn closes_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;

    let start = Utc::now() - Duration::seconds(90);
    let open =
        factory::study_session::create_open_session(db, user.id, Some(category.id), start).await?;

    let repo = StudySessionRepository::new(db);
    let end = start + Duration::seconds(90);
    let closed = repo.close(open.id, user.id, end, 90).await?;

    assert!(closed);

    let stored = entity::prelude::StudySession::find_by_id(open.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.end_time, Some(end));
    assert_eq!(stored.duration, Some(90));
    assert!(stored.open_user_id.is_none());

    Ok(())
}

/// Tests that an already closed session cannot be closed again.
///
/// Expected: Ok(false) and the first close is preserved
#[tokio::test]
async fn does_not_close_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;

    let start = Utc::now() - Duration::seconds(120);
    let open =
        factory::study_session::create_open_session(db, user.id, Some(category.id), start).await?;

    let repo = StudySessionRepository::new(db);
    assert!(repo.close(open.id, user.id, start + Duration::seconds(60), 60).await?);
    let second = repo
        .close(open.id, user.id, start + Duration::seconds(120), 120)
        .await?;

    assert!(!second);

    let stored = repo.get_by_id(open.id).await?.unwrap();
    assert_eq!(stored.duration, Some(60));

    Ok(())
}

/// Tests that a user cannot close someone else's session.
///
/// Expected: Ok(false) and the session stays open
#[tokio::test]
async fn does_not_close_foreign_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, category) = factory::helpers::create_user_with_category(db).await?;
    let other = factory::create_user(db).await?;

    let open =
        factory::study_session::create_open_session(db, owner.id, Some(category.id), Utc::now())
            .await?;

    let repo = StudySessionRepository::new(db);
    let closed = repo.close(open.id, other.id, Utc::now(), 10).await?;

    assert!(!closed);
    assert!(repo.get_by_id(open.id).await?.unwrap().is_open());

    Ok(())
}

/// Tests closing a session id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = StudySessionRepository::new(db);
    let closed = repo.close(999, user.id, Utc::now(), 10).await?;

    assert!(!closed);

    Ok(())
}
