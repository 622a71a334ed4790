//! Infrastructure layer - Repository implementations and services

pub mod dataset;
pub mod logging;
pub mod user;
