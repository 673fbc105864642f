use super::*;

/// Tests reading the open session.
///
/// Expected: Ok(Some) while active, Ok(None) after stop
#[tokio::test]
async fn reports_open_session_until_stopped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;
    let notifier = RecordingNotifier::default();
    let service = StudySessionService::new(db, LevelCurve::default(), &notifier);

    assert!(service.get_current(user.id).await?.is_none());

    let t0 = Utc::now();
    let session = service.start(start_params(user.id, category.id, t0)).await?;
    let current = service.get_current(user.id).await?;
    assert_eq!(current.map(|s| s.id), Some(session.id));

    service
        .stop(stop_params(user.id, session.id, t0 + Duration::seconds(10)))
        .await?;
    assert!(service.get_current(user.id).await?.is_none());

    Ok(())
}
