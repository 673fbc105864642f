//! Character progression domain models.
//!
//! A character holds a user's level and the exp accumulated within that level. The
//! types here describe progress snapshots and the outcome of granting exp; the level
//! curve itself lives in the leveling service.

use crate::model::character::{CharacterDto, RankingEntryDto, RenameCharacterDto};

/// Snapshot of a user's character for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub level: i32,
    pub exp: i64,
    /// Threshold of the current level, i.e. the exp at which the next level is reached.
    pub next_level_exp: i64,
}

impl Character {
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            name: self.name,
            level: self.level,
            exp: self.exp,
            next_level_exp: self.next_level_exp,
        }
    }
}

/// Parameters for renaming a user's character.
#[derive(Debug, Clone)]
pub struct RenameCharacterParams {
    pub user_id: i32,
    /// New name, trimmed; length is validated by the service.
    pub name: String,
}

impl RenameCharacterParams {
    pub fn from_dto(user_id: i32, dto: RenameCharacterDto) -> Self {
        Self {
            user_id,
            name: dto.character_name.trim().to_string(),
        }
    }
}

/// Result of applying gained exp to a level/exp pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceGain {
    /// At least one level threshold was crossed.
    pub level_up_occurred: bool,
    pub levels_gained: i32,
    pub new_level: i32,
    pub new_exp: i64,
}

/// One row of the public leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub character_name: String,
    pub nickname: String,
    pub level: i32,
    pub exp: i64,
}

impl RankingEntry {
    /// Builds a leaderboard row from a character and its owning user.
    pub fn from_entity(character: entity::character::Model, user: entity::user::Model) -> Self {
        Self {
            character_name: character.name,
            nickname: user.nickname,
            level: character.level,
            exp: character.exp,
        }
    }

    pub fn into_dto(self) -> RankingEntryDto {
        RankingEntryDto {
            character_name: self.character_name,
            nickname: self.nickname,
            level: self.level,
            exp: self.exp,
        }
    }
}
