use super::*;

/// Tests leaderboard ordering by level, then exp.
///
/// Expected: Ok with characters sorted level desc, exp desc
#[tokio::test]
async fn orders_by_level_then_exp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, level, exp) in [("Low", 1, 50), ("High", 5, 10), ("Mid", 3, 80), ("MidLow", 3, 20)] {
        let user = factory::create_user(db).await?;
        factory::character::CharacterFactory::new(db, user.id)
            .name(name)
            .level(level)
            .exp(exp)
            .build()
            .await?;
    }

    let repo = CharacterRepository::new(db);
    let ranking = repo.get_ranking(100).await?;

    let names: Vec<&str> = ranking.iter().map(|r| r.character_name.as_str()).collect();
    assert_eq!(names, vec!["High", "Mid", "MidLow", "Low"]);

    Ok(())
}

/// Tests that the leaderboard is truncated to the limit and carries owner nicknames.
///
/// Expected: Ok with `limit` rows
#[tokio::test]
async fn respects_limit_and_includes_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for level in 1..=3 {
        let user = factory::user::UserFactory::new(db)
            .nickname(format!("Player{}", level))
            .build()
            .await?;
        factory::character::CharacterFactory::new(db, user.id)
            .level(level)
            .build()
            .await?;
    }

    let repo = CharacterRepository::new(db);
    let ranking = repo.get_ranking(2).await?;

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].nickname, "Player3");
    assert_eq!(ranking[0].level, 3);

    Ok(())
}
