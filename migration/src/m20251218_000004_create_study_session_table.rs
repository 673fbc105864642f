use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251218_000001_create_user_table::User,
    m20251218_000003_create_study_category_table::StudyCategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudySession::Table)
                    .if_not_exists()
                    .col(pk_auto(StudySession::Id))
                    .col(integer(StudySession::UserId))
                    .col(integer_null(StudySession::CategoryId))
                    .col(timestamp_with_time_zone(StudySession::StartTime))
                    .col(timestamp_with_time_zone_null(StudySession::EndTime))
                    .col(big_integer_null(StudySession::Duration))
                    .col(integer_null(StudySession::OpenUserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_session_user_id")
                            .from(StudySession::Table, StudySession::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_session_category_id")
                            .from(StudySession::Table, StudySession::CategoryId)
                            .to(StudyCategory::Table, StudyCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one open session per user; closed rows carry NULL and never collide
        manager
            .create_index(
                Index::create()
                    .name("idx_study_session_open_user_id")
                    .table(StudySession::Table)
                    .col(StudySession::OpenUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_study_session_user_id_start_time")
                    .table(StudySession::Table)
                    .col(StudySession::UserId)
                    .col(StudySession::StartTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_study_session_user_id_start_time")
                    .table(StudySession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_study_session_open_user_id")
                    .table(StudySession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StudySession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StudySession {
    Table,
    Id,
    UserId,
    CategoryId,
    StartTime,
    EndTime,
    Duration,
    OpenUserId,
}
