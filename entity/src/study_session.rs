use sea_orm::entity::prelude::*;

/// A timed study session.
///
/// A row with `end_time = NULL` is open. While open, `open_user_id` mirrors `user_id`;
/// it is cleared when the session closes. The unique constraint on `open_user_id`
/// therefore allows any number of closed sessions but at most one open session per
/// user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub category_id: Option<i32>,
    pub start_time: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    /// Whole seconds between `start_time` and `end_time`, set once on close.
    pub duration: Option<i64>,
    #[sea_orm(unique)]
    pub open_user_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::study_category::Entity",
        from = "Column::CategoryId",
        to = "super::study_category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    StudyCategory,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::study_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
