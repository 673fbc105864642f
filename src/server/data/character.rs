//! Character progress repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::character::{ExperienceGain, RankingEntry};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the character row of a user.
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Inserts a level 1 character with no exp.
    ///
    /// # Arguments
    /// - `user_id` - Owner; at most one character per user
    /// - `name` - Display name of the character
    ///
    /// # Returns
    /// - `Ok(Model)` - Created character
    /// - `Err(DbErr)` - Database error, including a unique violation when the user
    ///   already has a character
    pub async fn create_default(
        &self,
        user_id: i32,
        name: String,
    ) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name),
            level: ActiveValue::Set(1),
            exp: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Renames the user's character.
    ///
    /// # Returns
    /// - `Ok(true)` - Character renamed
    /// - `Ok(false)` - The user has no character row
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, user_id: i32, name: String) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::update_many()
            .set(entity::character::ActiveModel {
                name: ActiveValue::Set(name),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Writes new progress only if the stored level and exp still match what was read.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the character
    /// - `read_level` / `read_exp` - Values the gain was computed from
    /// - `gain` - New level and exp to persist
    ///
    /// # Returns
    /// - `Ok(true)` - Progress updated
    /// - `Ok(false)` - Row changed since it was read, nothing written
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_progress(
        &self,
        user_id: i32,
        read_level: i32,
        read_exp: i64,
        gain: &ExperienceGain,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::update_many()
            .set(entity::character::ActiveModel {
                level: ActiveValue::Set(gain.new_level),
                exp: ActiveValue::Set(gain.new_exp),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::character::Column::UserId.eq(user_id))
            .filter(entity::character::Column::Level.eq(read_level))
            .filter(entity::character::Column::Exp.eq(read_exp))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets the highest ranked characters, by level then exp, with their owners.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows
    pub async fn get_ranking(&self, limit: u64) -> Result<Vec<RankingEntry>, DbErr> {
        let rows = entity::prelude::Character::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::character::Column::Level)
            .order_by_desc(entity::character::Column::Exp)
            .order_by_asc(entity::character::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(character, user)| {
                user.map(|user| RankingEntry::from_entity(character, user))
            })
            .collect())
    }
}
