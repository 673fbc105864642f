use sea_orm::entity::prelude::*;

/// Application account. Rows are created by the account subsystem; this crate only
/// reads them to resolve the authenticated user and to join ranking data.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub nickname: String,
    pub admin: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
    #[sea_orm(has_many = "super::study_category::Entity")]
    StudyCategory,
    #[sea_orm(has_many = "super::study_session::Entity")]
    StudySession,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl Related<super::study_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyCategory.def()
    }
}

impl Related<super::study_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudySession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
