//! User domain
//!
//! Users are identified by API key. Admins manage every dataset, annotators
//! only the ones they created.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserRole};
pub use repository::UserRepository;
pub use validation::{validate_api_key, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
