//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the notifier
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Owning the transaction of multi-step operations

pub mod category;
pub mod character;
pub mod leveling;
pub mod notification;
pub mod stats;
pub mod study_session;
