//! Annotation Hub
//!
//! Dataset management API for annotation projects:
//! - Datasets created for text or token classification
//! - Label schema settings validated against the dataset task
//! - Per-user API keys; only the creator may change or delete a dataset
//! - An HTTP client with a `configure_dataset` workflow

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use client::{Client, ClientConfig, ClientError};
pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::User;
use infrastructure::{
    dataset::{DatasetService, InMemoryDatasetRepository},
    user::InMemoryUserRepository,
};
use tracing::info;

/// Create the application state from the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let users = config
        .users
        .iter()
        .map(|u| {
            User::new(&u.username, u.role, &u.api_key)
                .map_err(|e| anyhow::anyhow!("Invalid user '{}' in configuration: {}", u.username, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if users.is_empty() {
        anyhow::bail!("At least one user must be configured");
    }

    info!(count = users.len(), "Loaded API users");

    let user_repository = Arc::new(InMemoryUserRepository::with_users(users)?);
    let dataset_repository = Arc::new(InMemoryDatasetRepository::new());
    let dataset_service = Arc::new(DatasetService::new(dataset_repository));

    Ok(AppState::new(dataset_service, user_repository))
}
