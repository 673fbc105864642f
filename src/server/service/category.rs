use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::StudyCategoryRepository,
    error::AppError,
    model::category::{CreateStudyCategoryParams, StudyCategory, UpdateStudyCategoryParams},
};

pub struct StudyCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's categories, most recently created first
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<StudyCategory>, AppError> {
        let repo = StudyCategoryRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Creates a category after rejecting blank names
    pub async fn create(&self, params: CreateStudyCategoryParams) -> Result<StudyCategory, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Category name must not be empty".to_string(),
            ));
        }

        let repo = StudyCategoryRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Renames one of the user's categories.
    ///
    /// # Returns
    /// - `Ok(StudyCategory)` - Category with its new name
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::NotFound)` - Category missing or owned by another user
    pub async fn rename(
        &self,
        params: UpdateStudyCategoryParams,
    ) -> Result<StudyCategory, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Category name must not be empty".to_string(),
            ));
        }

        let repo = StudyCategoryRepository::new(self.db);

        let category = StudyCategory {
            id: params.id,
            user_id: params.user_id,
            name: params.name.clone(),
        };

        if !repo.update_name(params).await? {
            return Err(category_not_found());
        }

        Ok(category)
    }

    /// Deletes one of the user's categories. Its sessions become uncategorized.
    pub async fn delete(&self, category_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = StudyCategoryRepository::new(self.db);

        if !repo.delete(category_id, user_id).await? {
            return Err(category_not_found());
        }

        tracing::info!("User {} deleted study category {}", user_id, category_id);

        Ok(())
    }
}

fn category_not_found() -> AppError {
    AppError::NotFound("Category not found".to_string())
}
