use super::*;

/// Tests the seven-day series with gaps.
///
/// Expected: Ok with seven labels oldest first, zeros for empty days
#[tokio::test]
async fn zero_fills_last_seven_days() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, category) = factory::helpers::create_user_with_category(db).await?;
    let now = wednesday_noon();
    let cat = Some(category.id);

    factory::study_session::create_closed_session(db, user.id, cat, now - Duration::hours(1), 300)
        .await?;
    factory::study_session::create_closed_session(db, user.id, cat, now - Duration::days(2), 600)
        .await?;
    factory::study_session::create_closed_session(db, user.id, cat, now - Duration::days(6), 60)
        .await?;
    // Eight days ago, outside the window
    factory::study_session::create_closed_session(db, user.id, cat, now - Duration::days(8), 999)
        .await?;

    let chart = StudyStatsService::new(db, reporting_offset(9))
        .get_last_7_days(user.id, now)
        .await?;

    assert_eq!(
        chart.labels,
        vec![
            "2026-03-05",
            "2026-03-06",
            "2026-03-07",
            "2026-03-08",
            "2026-03-09",
            "2026-03-10",
            "2026-03-11",
        ]
    );
    assert_eq!(chart.seconds, vec![60, 0, 0, 0, 600, 0, 300]);

    Ok(())
}
