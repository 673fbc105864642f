//! User domain model.
//!
//! Users are registered by the external auth subsystem; this backend only reads them to
//! resolve the session owner and their permissions.

/// Authenticated application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            nickname: entity.nickname,
            admin: entity.admin,
        }
    }
}
