use sea_orm_migration::{prelude::*, schema::*};

use super::m20251218_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyCategory::Id))
                    .col(integer(StudyCategory::UserId))
                    .col(string(StudyCategory::Name))
                    .col(
                        timestamp_with_time_zone(StudyCategory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_category_user_id")
                            .from(StudyCategory::Table, StudyCategory::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyCategory {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
}
