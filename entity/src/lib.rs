//! SeaORM entity definitions for the godsaeng database schema.
//!
//! Each module maps one table. Entities are generated to match the migrations in the
//! `migration` crate and are used by the repository layer and by `test-utils` to build
//! in-memory schemas.

pub mod prelude;

pub mod character;
pub mod notification;
pub mod study_category;
pub mod study_session;
pub mod user;
