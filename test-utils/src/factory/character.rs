//! Character factory for creating leveling progress rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a user's character with a chosen level and exp.
///
/// # Example
///
/// ```rust,ignore
/// let character = CharacterFactory::new(&db, user.id)
///     .level(3)
///     .exp(40)
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    level: i32,
    exp: i64,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a factory for a level 1 character with 0 exp.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Character {}", user_id),
            level: 1,
            exp: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn exp(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Builds and inserts the character row.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            level: ActiveValue::Set(self.level),
            exp: ActiveValue::Set(self.exp),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a level 1 character with 0 exp for the user.
pub async fn create_character(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, user_id).build().await
}
