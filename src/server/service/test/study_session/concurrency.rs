use super::*;

/// Tests two stops of the same session racing each other.
///
/// Expected: exactly one Ok and one Err(AppError::NotFound), exp granted once
#[tokio::test]
async fn concurrent_stops_apply_exp_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _, category) = factory::helpers::create_study_dependencies(db).await?;
    let start = Utc::now() - Duration::minutes(10);
    let open =
        factory::study_session::create_open_session(db, user.id, Some(category.id), start).await?;
    let notifier = RecordingNotifier::default();
    let service = StudySessionService::new(db, LevelCurve::default(), &notifier);

    let now = start + Duration::minutes(10);
    let (first, second) = tokio::join!(
        service.stop(stop_params(user.id, open.id, now)),
        service.stop(stop_params(user.id, open.id, now)),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    let not_found = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(AppError::NotFound(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(not_found, 1);

    let stored = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(stored.exp, 10);

    Ok(())
}

/// Tests two starts for the same idle user racing each other.
///
/// Expected: exactly one Ok and one Err(AppError::Conflict)
#[tokio::test]
async fn concurrent_starts_open_one_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;
    let notifier = RecordingNotifier::default();
    let service = StudySessionService::new(db, LevelCurve::default(), &notifier);

    let now = Utc::now();
    let (first, second) = tokio::join!(
        service.start(start_params(user.id, category.id, now)),
        service.start(start_params(user.id, category.id, now)),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    let conflicts = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);

    Ok(())
}
