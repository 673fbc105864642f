pub use sea_orm_migration::prelude::*;

mod m20251218_000001_create_user_table;
mod m20251218_000002_create_character_table;
mod m20251218_000003_create_study_category_table;
mod m20251218_000004_create_study_session_table;
mod m20251218_000005_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251218_000001_create_user_table::Migration),
            Box::new(m20251218_000002_create_character_table::Migration),
            Box::new(m20251218_000003_create_study_category_table::Migration),
            Box::new(m20251218_000004_create_study_session_table::Migration),
            Box::new(m20251218_000005_create_notification_table::Migration),
        ]
    }
}
