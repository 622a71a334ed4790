//! Dataset infrastructure implementations

mod repository;
mod service;

pub use repository::InMemoryDatasetRepository;
pub use service::{CreateDatasetRequest, DatasetService};
