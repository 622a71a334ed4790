//! In-memory dataset repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::dataset::{concurrent_modification, Dataset, DatasetName, DatasetRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory dataset repository
///
/// Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryDatasetRepository {
    datasets: RwLock<HashMap<String, Dataset>>,
}

impl InMemoryDatasetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Dataset store lock poisoned: {}", e))
}

#[async_trait]
impl DatasetRepository for InMemoryDatasetRepository {
    async fn get(&self, name: &DatasetName) -> Result<Option<Dataset>, DomainError> {
        let datasets = self.datasets.read().map_err(lock_error)?;
        Ok(datasets.get(name.as_str()).cloned())
    }

    async fn create(&self, dataset: Dataset) -> Result<Dataset, DomainError> {
        let mut datasets = self.datasets.write().map_err(lock_error)?;
        let key = dataset.name().as_str().to_string();

        if datasets.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Dataset '{}' already exists",
                key
            )));
        }

        datasets.insert(key, dataset.clone());
        Ok(dataset)
    }

    async fn update(&self, current: &Dataset, updated: Dataset) -> Result<Dataset, DomainError> {
        if updated.name() != current.name() {
            return Err(DomainError::internal(format!(
                "Cannot rename dataset '{}' to '{}'",
                current.name(),
                updated.name()
            )));
        }

        let mut datasets = self.datasets.write().map_err(lock_error)?;
        let key = current.name().as_str();

        let Some(stored) = datasets.get(key) else {
            return Err(DomainError::not_found(format!("Dataset '{}' not found", key)));
        };

        if stored != current {
            return Err(concurrent_modification(current.name()));
        }

        datasets.insert(key.to_string(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, current: &Dataset) -> Result<bool, DomainError> {
        let mut datasets = self.datasets.write().map_err(lock_error)?;
        let key = current.name().as_str();

        let Some(stored) = datasets.get(key) else {
            return Ok(false);
        };

        if stored != current {
            return Err(concurrent_modification(current.name()));
        }

        Ok(datasets.remove(key).is_some())
    }

    async fn list(&self) -> Result<Vec<Dataset>, DomainError> {
        let datasets = self.datasets.read().map_err(lock_error)?;
        let mut result: Vec<Dataset> = datasets.values().cloned().collect();
        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }

    async fn exists(&self, name: &DatasetName) -> Result<bool, DomainError> {
        let datasets = self.datasets.read().map_err(lock_error)?;
        Ok(datasets.contains_key(name.as_str()))
    }
}
