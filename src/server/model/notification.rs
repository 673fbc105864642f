//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::notification::{CreateNotificationDto, NotificationDto},
    server::error::AppError,
};

/// Category of a notification, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    LevelUp,
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LevelUp => "level_up",
            Self::System => "system",
        }
    }

    /// Parses the stored representation, returning `None` for unknown kinds.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "level_up" => Some(Self::LevelUp),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a notification domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored kind is not a known `NotificationKind`
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, DbErr> {
        let kind = NotificationKind::parse(&entity.kind).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown notification kind '{}' on notification {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            kind,
            title: entity.title,
            message: entity.message,
            is_read: entity.is_read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind.as_str().to_string(),
            title: self.title,
            message: self.message,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl CreateNotificationParams {
    /// Converts an admin-submitted payload.
    ///
    /// # Returns
    /// - `Ok(CreateNotificationParams)` - Valid payload
    /// - `Err(AppError::BadRequest)` - Unknown kind or blank title
    pub fn from_dto(dto: CreateNotificationDto) -> Result<Self, AppError> {
        let kind = NotificationKind::parse(&dto.kind)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown notification kind '{}'", dto.kind)))?;

        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest(
                "Notification title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            user_id: dto.user_id,
            kind,
            title,
            message: dto.message,
        })
    }
}
