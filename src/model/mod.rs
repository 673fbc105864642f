//! Data transfer objects exchanged with API clients.
//!
//! Field names are serialized in camelCase to match the JSON contract of the web
//! frontend. Server-side domain models convert into these at the controller boundary.

pub mod api;
pub mod category;
pub mod character;
pub mod notification;
pub mod study;
