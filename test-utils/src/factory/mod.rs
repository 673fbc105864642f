//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each module exposes a `*Factory` builder for customization and a
//! `create_*` shorthand for the defaults.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let category = factory::study_category::create_category(&db, user.id).await?;
//!
//! let session = factory::study_session::StudySessionFactory::new(&db, user.id)
//!     .category_id(Some(category.id))
//!     .start_time(Utc::now())
//!     .closed_after(600)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `character` - Create character progress rows
//! - `study_category` - Create study categories
//! - `study_session` - Create open or closed study sessions
//! - `notification` - Create notifications
//! - `helpers` - ID generation and multi-entity shortcuts

pub mod character;
pub mod helpers;
pub mod notification;
pub mod study_category;
pub mod study_session;
pub mod user;

pub use character::create_character;
pub use notification::create_notification;
pub use study_category::create_category;
pub use study_session::create_open_session;
pub use user::create_user;
