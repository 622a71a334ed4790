//! Application state for shared services

use std::sync::Arc;

use crate::domain::dataset::{Dataset, DatasetRepository, Settings};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::dataset::{CreateDatasetRequest, DatasetService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub dataset_service: Arc<dyn DatasetServiceTrait>,
    pub user_repository: Arc<dyn UserRepository>,
}

/// Trait for dataset service operations
#[async_trait::async_trait]
pub trait DatasetServiceTrait: Send + Sync {
    async fn create(&self, actor: &User, request: CreateDatasetRequest)
        -> Result<Dataset, DomainError>;
    async fn get(&self, name: &str) -> Result<Option<Dataset>, DomainError>;
    async fn list(&self) -> Result<Vec<Dataset>, DomainError>;
    async fn configure_settings(
        &self,
        actor: &User,
        name: &str,
        settings: Settings,
    ) -> Result<Dataset, DomainError>;
    async fn load_settings(&self, name: &str) -> Result<Option<Settings>, DomainError>;
    async fn delete(&self, actor: &User, name: &str) -> Result<bool, DomainError>;
}

#[async_trait::async_trait]
impl<R: DatasetRepository + 'static> DatasetServiceTrait for DatasetService<R> {
    async fn create(
        &self,
        actor: &User,
        request: CreateDatasetRequest,
    ) -> Result<Dataset, DomainError> {
        DatasetService::create(self, actor, request).await
    }

    async fn get(&self, name: &str) -> Result<Option<Dataset>, DomainError> {
        DatasetService::get(self, name).await
    }

    async fn list(&self) -> Result<Vec<Dataset>, DomainError> {
        DatasetService::list(self).await
    }

    async fn configure_settings(
        &self,
        actor: &User,
        name: &str,
        settings: Settings,
    ) -> Result<Dataset, DomainError> {
        DatasetService::configure_settings(self, actor, name, settings).await
    }

    async fn load_settings(&self, name: &str) -> Result<Option<Settings>, DomainError> {
        DatasetService::load_settings(self, name).await
    }

    async fn delete(&self, actor: &User, name: &str) -> Result<bool, DomainError> {
        DatasetService::delete(self, actor, name).await
    }
}

impl AppState {
    pub fn new(
        dataset_service: Arc<dyn DatasetServiceTrait>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            dataset_service,
            user_repository,
        }
    }
}
