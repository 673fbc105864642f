//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert request DTOs into
//! service parameters, call the service layer and convert domain models back into
//! response DTOs. Every handler is annotated for the OpenAPI document.

pub mod auth;
pub mod category;
pub mod character;
pub mod notification;
pub mod study;
