use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{character::CharacterRepository, user::UserRepository},
    error::AppError,
    model::character::{Character, RankingEntry, RenameCharacterParams},
    service::leveling::LevelCurve,
};

/// Number of characters shown on the public leaderboard.
const RANKING_LIMIT: u64 = 100;

/// Accepted character name length, in characters, after trimming.
const NAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=10;

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    curve: LevelCurve,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection, curve: LevelCurve) -> Self {
        Self { db, curve }
    }

    /// Gets the user's character.
    ///
    /// Users who have never recorded a session have no character row yet; they read as a
    /// level 1 character with no exp, named after the user's nickname.
    ///
    /// # Returns
    /// - `Ok(Character)` - Stored or default character
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_for_user(&self, user_id: i32) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        let (name, level, exp) = match repo.find_by_user_id(user_id).await? {
            Some(character) => (character.name, character.level, character.exp),
            None => {
                let user = UserRepository::new(self.db)
                    .find_by_id(user_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

                (user.nickname, 1, 0)
            }
        };

        Ok(Character {
            name,
            level,
            exp,
            next_level_exp: self.curve.threshold(level),
        })
    }

    /// Gets the leaderboard ordered by level, then exp, both descending.
    pub async fn get_ranking(&self) -> Result<Vec<RankingEntry>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_ranking(RANKING_LIMIT).await?)
    }

    /// Renames the user's character.
    ///
    /// A user who has never recorded a session gets their level 1 character created
    /// with the new name.
    ///
    /// # Returns
    /// - `Ok(Character)` - Character with the new name
    /// - `Err(AppError::BadRequest)` - Name shorter than 2 or longer than 10 characters
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn rename(&self, params: RenameCharacterParams) -> Result<Character, AppError> {
        if !NAME_LENGTH.contains(&params.name.chars().count()) {
            return Err(AppError::BadRequest(
                "Character name must be between 2 and 10 characters".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let repo = CharacterRepository::new(&txn);

        if !repo.update_name(params.user_id, params.name.clone()).await? {
            repo.create_default(params.user_id, params.name).await?;
        }

        txn.commit().await?;

        self.get_for_user(params.user_id).await
    }
}
