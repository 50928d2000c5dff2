//! Service layer - account lifecycle use cases.

mod user_service;

pub use user_service::{UserManager, UserService};
