//! Dataset API request and response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dataset::{Dataset, Settings, TaskType};
use crate::domain::user::{User, UserRole};

/// Request to create a new dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatasetApiRequest {
    pub name: String,
    pub task: TaskType,
}

/// Dataset as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetResponse {
    pub name: String,
    pub task: TaskType,
    pub owner: String,
    #[serde(default)]
    pub settings: Option<Settings>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Dataset> for DatasetResponse {
    fn from(dataset: &Dataset) -> Self {
        Self {
            name: dataset.name().to_string(),
            task: dataset.task(),
            owner: dataset.owner().to_string(),
            settings: dataset.settings().cloned(),
            created_at: dataset.created_at(),
            updated_at: dataset.updated_at(),
        }
    }
}

/// List datasets response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDatasetsResponse {
    pub datasets: Vec<DatasetResponse>,
    pub total: usize,
}

/// Delete dataset response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDatasetResponse {
    pub deleted: bool,
    pub name: String,
}

/// The authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub role: UserRole,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            role: user.role(),
        }
    }
}
