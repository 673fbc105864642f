//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Notifier used by workflows to announce events to users
//! - Level curve used to turn exp into levels
//! - Reporting offset that defines local days for statistics

use chrono::FixedOffset;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::{
        leveling::LevelCurve,
        notification::{DbNotifier, Notifier},
    },
    util::time::reporting_offset,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn Notifier>` is a reference-counted pointer
/// - `LevelCurve` and `FixedOffset` are `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Fire-and-forget notification sink.
    pub notifier: Arc<dyn Notifier>,

    /// Exp thresholds per level.
    pub level_curve: LevelCurve,

    /// UTC offset whose calendar groups study statistics.
    pub stats_offset: FixedOffset,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifier` - Notification sink for workflow events
    /// - `level_curve` - Level thresholds
    /// - `stats_offset` - Reporting offset for statistics
    pub fn new(
        db: DatabaseConnection,
        notifier: Arc<dyn Notifier>,
        level_curve: LevelCurve,
        stats_offset: FixedOffset,
    ) -> Self {
        Self {
            db,
            notifier,
            level_curve,
            stats_offset,
        }
    }

    /// Creates the production state: notifications are stored in the same database and
    /// the curve and offset come from configuration.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        let notifier = Arc::new(DbNotifier::new(db.clone()));

        Self::new(
            db,
            notifier,
            LevelCurve::new(config.level_base_exp, config.level_exp_step),
            reporting_offset(config.stats_utc_offset_hours),
        )
    }
}
