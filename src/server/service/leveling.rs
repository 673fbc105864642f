//! Experience and level engine.
//!
//! One minute of recorded focus grants one exp. Exp is tracked within the current level:
//! whenever it reaches the level's threshold, the threshold is subtracted and the level
//! increases, repeatedly, so a single grant can cross several levels.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{character::CharacterRepository, user::UserRepository},
    error::AppError,
    model::character::ExperienceGain,
};

/// Linear level curve: `threshold(level) = base + step * (level - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCurve {
    base: i64,
    step: i64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self { base: 60, step: 30 }
    }
}

impl LevelCurve {
    /// Creates a curve. `base` is raised to at least 1 and `step` to at least 0 so every
    /// threshold is positive.
    pub fn new(base: i64, step: i64) -> Self {
        Self {
            base: base.max(1),
            step: step.max(0),
        }
    }

    /// Exp required to advance from `level` to `level + 1`.
    pub fn threshold(&self, level: i32) -> i64 {
        self.base + self.step * i64::from(level.max(1) - 1)
    }

    /// Adds `gained` exp to a level/exp pair and rolls over every crossed threshold.
    pub fn apply(&self, level: i32, exp: i64, gained: i64) -> ExperienceGain {
        let mut new_level = level.max(1);
        let mut new_exp = exp.max(0) + gained.max(0);

        while new_exp >= self.threshold(new_level) {
            new_exp -= self.threshold(new_level);
            new_level += 1;
        }

        let levels_gained = new_level - level.max(1);

        ExperienceGain {
            level_up_occurred: levels_gained > 0,
            levels_gained,
            new_level,
            new_exp,
        }
    }
}

/// Applies experience to a user's character on a caller-supplied connection.
///
/// Never opens a transaction of its own: the stop workflow passes its transaction so the
/// session close and the progress update commit or roll back together.
pub struct LevelingService<'a, C: ConnectionTrait> {
    db: &'a C,
    curve: LevelCurve,
}

impl<'a, C: ConnectionTrait> LevelingService<'a, C> {
    pub fn new(db: &'a C, curve: LevelCurve) -> Self {
        Self { db, curve }
    }

    /// Grants `minutes` exp to the user's character.
    ///
    /// A user without a character row gets a level 1 character named after their
    /// nickname before the grant is applied.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the character
    /// - `minutes` - Whole minutes of recorded focus
    ///
    /// # Returns
    /// - `Ok(ExperienceGain)` - Persisted new level and exp
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::InternalError)` - Progress changed between read and write
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn apply_experience(
        &self,
        user_id: i32,
        minutes: i64,
    ) -> Result<ExperienceGain, AppError> {
        let repo = CharacterRepository::new(self.db);

        let character = match repo.find_by_user_id(user_id).await? {
            Some(character) => character,
            None => {
                let user = UserRepository::new(self.db)
                    .find_by_id(user_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

                repo.create_default(user_id, user.nickname).await?
            }
        };

        let gain = self.curve.apply(character.level, character.exp, minutes);

        let updated = repo
            .update_progress(user_id, character.level, character.exp, &gain)
            .await?;
        if !updated {
            return Err(AppError::InternalError(format!(
                "Character progress of user {} changed during experience update",
                user_id
            )));
        }

        Ok(gain)
    }
}
