//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and shortcuts for creating a user together with the
//! rows most study tests need.

use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::factory::{character::create_character, study_category::create_category, user::create_user};

static COUNTER: AtomicU32 = AtomicU32::new(1);

/// Returns a process-wide unique number for default names and emails.
pub fn next_id() -> u32 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Creates a user and one study category owned by that user.
///
/// # Returns
/// - `Ok((user, category))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::study_category::Model), DbErr> {
    let user = create_user(db).await?;
    let category = create_category(db, user.id).await?;

    Ok((user, category))
}

/// Creates a user, a level 1 character for them and one study category.
///
/// # Returns
/// - `Ok((user, character, category))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_study_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::character::Model,
        entity::study_category::Model,
    ),
    DbErr,
> {
    let user = create_user(db).await?;
    let character = create_character(db, user.id).await?;
    let category = create_category(db, user.id).await?;

    Ok((user, character, category))
}
