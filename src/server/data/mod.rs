//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait`, so the same repository can run on the
//! shared connection pool or inside a caller-owned `DatabaseTransaction`.

pub mod category;
pub mod character;
pub mod notification;
pub mod study_session;
pub mod user;
