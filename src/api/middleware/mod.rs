//! API middleware components

pub mod auth;

pub use auth::{RequireUser, API_KEY_HEADER};
