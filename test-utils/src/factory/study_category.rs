//! Study category factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating study categories owned by a user.
pub struct StudyCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
}

impl<'a> StudyCategoryFactory<'a> {
    /// Creates a factory with the default name `"Category {id}"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Category {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the category.
    pub async fn build(self) -> Result<entity::study_category::Model, DbErr> {
        entity::study_category::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with a default name for the user.
pub async fn create_category(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::study_category::Model, DbErr> {
    StudyCategoryFactory::new(db, user_id).build().await
}
