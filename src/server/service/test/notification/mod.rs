use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, NotificationKind},
    service::notification::{DbNotifier, NotificationService, Notifier},
};
use test_utils::{builder::TestBuilder, factory};

mod mark_read;
