use super::*;

/// Tests two consecutive sessions: one discarded, one recorded.
///
/// A user starts at T0 and stops 3 seconds later, then starts at T1 and stops
/// 125 seconds later.
///
/// Expected: first duration 0, second duration 125, exp increased by exactly 2
#[tokio::test]
async fn discarded_then_recorded_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, character, category) = factory::helpers::create_study_dependencies(db).await?;
    let notifier = RecordingNotifier::default();
    let service = StudySessionService::new(db, LevelCurve::default(), &notifier);

    let t0 = Utc::now() - Duration::minutes(10);
    let first = service.start(start_params(user.id, category.id, t0)).await?;
    let first_outcome = service
        .stop(stop_params(user.id, first.id, t0 + Duration::seconds(3)))
        .await?;

    let t1 = t0 + Duration::minutes(1);
    let second = service.start(start_params(user.id, category.id, t1)).await?;
    let second_outcome = service
        .stop(stop_params(user.id, second.id, t1 + Duration::seconds(125)))
        .await?;

    assert_eq!(first_outcome.duration_seconds, 0);
    assert_eq!(second_outcome.duration_seconds, 125);

    let stored = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(stored.exp, character.exp + 2);

    Ok(())
}

/// Tests that splitting focus time below a level boundary gives the same result as one
/// long session.
///
/// Expected: 10 + 20 minutes and 30 minutes end with the same level and exp
#[tokio::test]
async fn split_sessions_match_single_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (split_user, _, split_category) = factory::helpers::create_study_dependencies(db).await?;
    let (single_user, _, single_category) = factory::helpers::create_study_dependencies(db).await?;
    let notifier = RecordingNotifier::default();
    let service = StudySessionService::new(db, LevelCurve::default(), &notifier);
    let t0 = Utc::now() - Duration::hours(2);

    for (offset, minutes) in [(0, 10), (30, 20)] {
        let start = t0 + Duration::minutes(offset);
        let session = service
            .start(start_params(split_user.id, split_category.id, start))
            .await?;
        service
            .stop(stop_params(
                split_user.id,
                session.id,
                start + Duration::minutes(minutes),
            ))
            .await?;
    }

    let session = service
        .start(start_params(single_user.id, single_category.id, t0))
        .await?;
    service
        .stop(stop_params(
            single_user.id,
            session.id,
            t0 + Duration::minutes(30),
        ))
        .await?;

    let repo = CharacterRepository::new(db);
    let split = repo.find_by_user_id(split_user.id).await?.unwrap();
    let single = repo.find_by_user_id(single_user.id).await?.unwrap();

    assert_eq!((split.level, split.exp), (single.level, single.exp));
    assert_eq!((single.level, single.exp), (1, 30));

    Ok(())
}
