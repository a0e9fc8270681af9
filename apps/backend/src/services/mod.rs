//! Use cases behind the HTTP handlers.
//!
//! Services take their collaborators explicitly and return `AppError`, so
//! they can be driven from tests without an HTTP stack.

pub mod auth;
pub mod transactions;
