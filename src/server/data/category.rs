//! Study category repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::category::{
    CreateStudyCategoryParams, StudyCategory, UpdateStudyCategoryParams,
};

pub struct StudyCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new category for a user.
    ///
    /// # Returns
    /// - `Ok(StudyCategory)` - Created category
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateStudyCategoryParams) -> Result<StudyCategory, DbErr> {
        let entity = entity::study_category::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StudyCategory::from_entity(entity))
    }

    /// Gets all categories owned by a user, most recently created first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<StudyCategory>, DbErr> {
        let entities = entity::prelude::StudyCategory::find()
            .filter(entity::study_category::Column::UserId.eq(user_id))
            .order_by_desc(entity::study_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StudyCategory::from_entity).collect())
    }

    /// Finds a category only if it belongs to the given user.
    ///
    /// # Returns
    /// - `Ok(Some(StudyCategory))` - Category exists and is owned by `user_id`
    /// - `Ok(None)` - Category missing or owned by someone else
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owned(
        &self,
        category_id: i32,
        user_id: i32,
    ) -> Result<Option<StudyCategory>, DbErr> {
        let entity = entity::prelude::StudyCategory::find_by_id(category_id)
            .filter(entity::study_category::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(StudyCategory::from_entity))
    }

    /// Renames a category owned by the user.
    ///
    /// # Returns
    /// - `Ok(true)` - Category renamed
    /// - `Ok(false)` - Category missing or owned by someone else
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, params: UpdateStudyCategoryParams) -> Result<bool, DbErr> {
        let result = entity::prelude::StudyCategory::update_many()
            .set(entity::study_category::ActiveModel {
                name: ActiveValue::Set(params.name),
                ..Default::default()
            })
            .filter(entity::study_category::Column::Id.eq(params.id))
            .filter(entity::study_category::Column::UserId.eq(params.user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a category owned by the user.
    ///
    /// Sessions filed under the category keep their history; the foreign key sets their
    /// `category_id` to NULL.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - Category missing or owned by someone else
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, category_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudyCategory::delete_many()
            .filter(entity::study_category::Column::Id.eq(category_id))
            .filter(entity::study_category::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
