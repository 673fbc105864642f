use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub name: String,
    pub level: i32,
    /// Exp accumulated within the current level.
    pub exp: i64,
    /// Exp required to reach the next level.
    pub next_level_exp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntryDto {
    pub character_name: String,
    pub nickname: String,
    pub level: i32,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenameCharacterDto {
    pub character_name: String,
}
