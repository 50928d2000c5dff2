//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The `User` record and its table/column mapping live here so every layer
//! agrees on one shape.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{UpdateUser, User};
