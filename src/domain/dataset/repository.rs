//! Dataset repository trait

use async_trait::async_trait;

use super::entity::{Dataset, DatasetName};
use crate::domain::DomainError;

/// Repository for managing datasets
#[async_trait]
pub trait DatasetRepository: Send + Sync + std::fmt::Debug {
    /// Get a dataset by name
    async fn get(&self, name: &DatasetName) -> Result<Option<Dataset>, DomainError>;

    /// Create a new dataset, fails if the name is taken
    async fn create(&self, dataset: Dataset) -> Result<Dataset, DomainError>;

    /// Replace `current` with `updated` in a single step
    ///
    /// Fails with a conflict when the stored dataset is no longer `current`.
    async fn update(&self, current: &Dataset, updated: Dataset) -> Result<Dataset, DomainError>;

    /// Delete `current` in a single step, returns false if nothing is stored
    ///
    /// Fails with a conflict when the name now holds a different dataset.
    async fn delete(&self, current: &Dataset) -> Result<bool, DomainError>;

    /// List all datasets sorted by name
    async fn list(&self) -> Result<Vec<Dataset>, DomainError>;

    async fn exists(&self, name: &DatasetName) -> Result<bool, DomainError> {
        Ok(self.get(name).await?.is_some())
    }
}

/// Error for a dataset that changed between read and write
pub fn concurrent_modification(name: &DatasetName) -> DomainError {
    DomainError::conflict(format!(
        "Dataset '{}' was modified concurrently, retry the operation",
        name
    ))
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockDatasetRepository {
        datasets: RwLock<HashMap<String, Dataset>>,
        error: RwLock<Option<String>>,
    }

    impl MockDatasetRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dataset(self, dataset: Dataset) -> Self {
            self.datasets
                .write()
                .unwrap()
                .insert(dataset.name().as_str().to_string(), dataset);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.write().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            match self.error.read().unwrap().clone() {
                Some(error) => Err(DomainError::storage(error)),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl DatasetRepository for MockDatasetRepository {
        async fn get(&self, name: &DatasetName) -> Result<Option<Dataset>, DomainError> {
            self.check_error()?;
            Ok(self.datasets.read().unwrap().get(name.as_str()).cloned())
        }

        async fn create(&self, dataset: Dataset) -> Result<Dataset, DomainError> {
            self.check_error()?;
            let mut datasets = self.datasets.write().unwrap();

            if datasets.contains_key(dataset.name().as_str()) {
                return Err(DomainError::conflict(format!(
                    "Dataset '{}' already exists",
                    dataset.name()
                )));
            }

            datasets.insert(dataset.name().as_str().to_string(), dataset.clone());
            Ok(dataset)
        }

        async fn update(&self, current: &Dataset, updated: Dataset) -> Result<Dataset, DomainError> {
            self.check_error()?;
            let mut datasets = self.datasets.write().unwrap();

            let Some(stored) = datasets.get(current.name().as_str()) else {
                return Err(DomainError::not_found(format!(
                    "Dataset '{}' not found",
                    current.name()
                )));
            };

            if stored != current {
                return Err(concurrent_modification(current.name()));
            }

            datasets.insert(current.name().as_str().to_string(), updated.clone());
            Ok(updated)
        }

        async fn delete(&self, current: &Dataset) -> Result<bool, DomainError> {
            self.check_error()?;
            let mut datasets = self.datasets.write().unwrap();

            let Some(stored) = datasets.get(current.name().as_str()) else {
                return Ok(false);
            };

            if stored != current {
                return Err(concurrent_modification(current.name()));
            }

            Ok(datasets.remove(current.name().as_str()).is_some())
        }

        async fn list(&self) -> Result<Vec<Dataset>, DomainError> {
            self.check_error()?;
            let mut result: Vec<Dataset> = self.datasets.read().unwrap().values().cloned().collect();
            result.sort_by(|a, b| a.name().cmp(b.name()));
            Ok(result)
        }
    }
}
