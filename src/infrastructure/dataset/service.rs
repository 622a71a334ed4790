//! Dataset service: ownership checks and task-typed settings

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::dataset::{Dataset, DatasetName, DatasetRepository, Settings, TaskType};
use crate::domain::user::User;
use crate::domain::DomainError;

/// Request for creating a new dataset
#[derive(Debug, Clone)]
pub struct CreateDatasetRequest {
    pub name: String,
    pub task: TaskType,
}

/// Dataset service for managing datasets and their settings
#[derive(Debug)]
pub struct DatasetService<R: DatasetRepository> {
    repository: Arc<R>,
}

fn parse_name(name: &str) -> Result<DatasetName, DomainError> {
    DatasetName::new(name).map_err(|e| DomainError::validation(e.to_string()))
}

fn ensure_can_manage(actor: &User, dataset: &Dataset, action: &str) -> Result<(), DomainError> {
    if actor.can_manage(dataset) {
        return Ok(());
    }

    warn!(
        user = %actor.username(),
        dataset = %dataset.name(),
        owner = %dataset.owner(),
        action,
        "Rejected dataset operation by non-owner"
    );

    Err(DomainError::forbidden(format!(
        "User '{}' is not allowed to {} dataset '{}'",
        actor.username(),
        action,
        dataset.name()
    )))
}

impl<R: DatasetRepository> DatasetService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new dataset owned by `actor`
    pub async fn create(
        &self,
        actor: &User,
        request: CreateDatasetRequest,
    ) -> Result<Dataset, DomainError> {
        info!(name = %request.name, task = %request.task, owner = %actor.username(), "Creating dataset");

        let name = parse_name(&request.name)?;

        if self.repository.exists(&name).await? {
            return Err(DomainError::conflict(format!(
                "Dataset '{}' already exists",
                name
            )));
        }

        let dataset = Dataset::new(name, request.task, actor.username());
        self.repository.create(dataset).await
    }

    pub async fn get(&self, name: &str) -> Result<Option<Dataset>, DomainError> {
        let name = parse_name(name)?;
        self.repository.get(&name).await
    }

    pub async fn list(&self) -> Result<Vec<Dataset>, DomainError> {
        self.repository.list().await
    }

    /// Replace the settings of an existing dataset
    ///
    /// The settings task must match the dataset task; on mismatch the stored
    /// settings stay as they were.
    pub async fn configure_settings(
        &self,
        actor: &User,
        name: &str,
        settings: Settings,
    ) -> Result<Dataset, DomainError> {
        info!(
            name = %name,
            task = %settings.task(),
            labels = settings.label_schema().len(),
            "Configuring dataset settings"
        );

        let dataset_name = parse_name(name)?;

        let current = self
            .repository
            .get(&dataset_name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Dataset '{}' not found", name)))?;

        ensure_can_manage(actor, &current, "configure")?;

        let mut updated = current.clone();
        updated.apply_settings(settings)?;

        // Only lands if the checked dataset is still the stored one
        self.repository.update(&current, updated).await
    }

    /// Load the current settings; `None` when the dataset was never configured
    pub async fn load_settings(&self, name: &str) -> Result<Option<Settings>, DomainError> {
        debug!(name = %name, "Loading dataset settings");

        let dataset = self
            .get(name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Dataset '{}' not found", name)))?;

        Ok(dataset.settings().cloned())
    }

    /// Delete a dataset
    ///
    /// Returns `false` when there was nothing to delete.
    pub async fn delete(&self, actor: &User, name: &str) -> Result<bool, DomainError> {
        info!(name = %name, user = %actor.username(), "Deleting dataset");

        let dataset_name = parse_name(name)?;

        let Some(dataset) = self.repository.get(&dataset_name).await? else {
            debug!(name = %name, "Dataset does not exist, nothing to delete");
            return Ok(false);
        };

        ensure_can_manage(actor, &dataset, "delete")?;

        self.repository.delete(&dataset).await
    }
}
