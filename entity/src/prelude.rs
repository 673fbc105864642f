pub use super::character::Entity as Character;
pub use super::notification::Entity as Notification;
pub use super::study_category::Entity as StudyCategory;
pub use super::study_session::Entity as StudySession;
pub use super::user::Entity as User;
