use super::*;

/// Tests finding the open session of a user.
///
/// Expected: Ok(Some) with the open session
#[tokio::test]
async fn finds_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;

    let open =
        factory::study_session::create_open_session(db, user.id, Some(category.id), Utc::now())
            .await?;

    let repo = StudySessionRepository::new(db);
    let result = repo.find_open_session(user.id).await?;

    assert_eq!(result.map(|s| s.id), Some(open.id));

    Ok(())
}

/// Tests that closed sessions are not reported as open.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_closed_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;

    factory::study_session::create_closed_session(
        db,
        user.id,
        Some(category.id),
        Utc::now() - Duration::hours(1),
        1200,
    )
    .await?;

    let repo = StudySessionRepository::new(db);
    let result = repo.find_open_session(user.id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that another user's open session is not returned.
///
/// Expected: Ok(None) for the idle user
#[tokio::test]
async fn ignores_other_users_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, category) = factory::helpers::create_user_with_category(db).await?;
    let other = factory::create_user(db).await?;

    factory::study_session::create_open_session(db, owner.id, Some(category.id), Utc::now())
        .await?;

    let repo = StudySessionRepository::new(db);

    assert!(repo.find_open_session(other.id).await?.is_none());

    Ok(())
}

/// Tests that an open session is only found by id for its owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn finds_open_by_id_only_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, category) = factory::helpers::create_user_with_category(db).await?;
    let other = factory::create_user(db).await?;

    let open =
        factory::study_session::create_open_session(db, owner.id, Some(category.id), Utc::now())
            .await?;

    let repo = StudySessionRepository::new(db);

    assert!(repo.find_open_by_id(open.id, owner.id).await?.is_some());
    assert!(repo.find_open_by_id(open.id, other.id).await?.is_none());
    assert!(repo.find_open_by_id(open.id + 100, owner.id).await?.is_none());

    Ok(())
}
