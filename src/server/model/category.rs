//! Study category domain models and parameters.

use crate::model::category::{CreateStudyCategoryDto, StudyCategoryDto, UpdateStudyCategoryDto};

/// A user-defined label that study sessions are filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyCategory {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

impl StudyCategory {
    pub fn from_entity(entity: entity::study_category::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> StudyCategoryDto {
        StudyCategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a study category.
#[derive(Debug, Clone)]
pub struct CreateStudyCategoryParams {
    pub user_id: i32,
    /// Category name; validated as non-blank by the service.
    pub name: String,
}

impl CreateStudyCategoryParams {
    /// Converts the request payload, trimming surrounding whitespace from the name.
    pub fn from_dto(user_id: i32, dto: CreateStudyCategoryDto) -> Self {
        Self {
            user_id,
            name: dto.category_name.trim().to_string(),
        }
    }
}

/// Parameters for renaming a study category.
#[derive(Debug, Clone)]
pub struct UpdateStudyCategoryParams {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

impl UpdateStudyCategoryParams {
    pub fn from_dto(id: i32, user_id: i32, dto: UpdateStudyCategoryDto) -> Self {
        Self {
            id,
            user_id,
            name: dto.category_name.trim().to_string(),
        }
    }
}
