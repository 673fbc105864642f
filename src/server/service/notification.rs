//! Notification delivery and inbox management.
//!
//! Workflows emit notifications through the `Notifier` trait, which is fire-and-forget:
//! delivery happens on a background task and failures are only logged. The inbox
//! operations in `NotificationService` back the notification endpoints.

use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification, NotificationKind},
};

/// Sink for user-facing notifications.
///
/// Implementations must return immediately and must not surface delivery errors to the
/// caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, user_id: i32, kind: NotificationKind, title: String, body: String);
}

/// Notifier that stores notifications in the database from a spawned task.
#[derive(Clone)]
pub struct DbNotifier {
    db: DatabaseConnection,
}

impl DbNotifier {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Spawns the insert and returns its handle so callers can await delivery.
    pub fn dispatch(&self, params: CreateNotificationParams) -> JoinHandle<()> {
        let db = self.db.clone();

        tokio::spawn(async move {
            let user_id = params.user_id;
            let kind = params.kind;

            if let Err(e) = NotificationRepository::new(&db).create(params).await {
                tracing::warn!(
                    "Failed to store {} notification for user {}: {}",
                    kind.as_str(),
                    user_id,
                    e
                );
            }
        })
    }
}

impl Notifier for DbNotifier {
    fn notify(&self, user_id: i32, kind: NotificationKind, title: String, body: String) {
        let _ = self.dispatch(CreateNotificationParams {
            user_id,
            kind,
            title,
            message: body,
        });
    }
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's notifications, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Creates a notification on behalf of an admin.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Marks one notification as read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked
    /// - `Err(AppError::NotFound)` - Notification missing or not the user's
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        if !repo.mark_read(id, user_id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    /// Marks every unread notification of the user as read and returns how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.mark_all_read(user_id).await?)
    }

    /// Deletes one notification.
    ///
    /// # Returns
    /// - `Ok(())` - Notification deleted
    /// - `Err(AppError::NotFound)` - Notification missing or not the user's
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        if !repo.delete(id, user_id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }
}
