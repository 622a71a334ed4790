//! Dataset entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::settings::{Settings, TaskType};
use super::validation::{validate_dataset_name, DatasetValidationError};
use crate::domain::DomainError;

/// Dataset name - lowercase alphanumeric plus '-' and '_', max 128 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetName(String);

impl DatasetName {
    /// Create a new DatasetName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, DatasetValidationError> {
        let name = name.into();
        validate_dataset_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DatasetName {
    type Error = DatasetValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatasetName> for String {
    fn from(name: DatasetName) -> Self {
        name.0
    }
}

impl std::fmt::Display for DatasetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named annotation dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    name: DatasetName,
    task: TaskType,
    /// Username of the creator
    owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    settings: Option<Settings>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(name: DatasetName, task: TaskType, owner: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            name,
            task,
            owner: owner.into(),
            settings: None,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn name(&self) -> &DatasetName {
        &self.name
    }

    pub fn task(&self) -> TaskType {
        self.task
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner == username
    }

    /// Replace the dataset settings
    ///
    /// Fails without touching the current settings when the settings were
    /// built for a different task.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), DomainError> {
        if settings.task() != self.task {
            return Err(DomainError::task_mismatch(
                self.name.as_str(),
                self.task,
                settings.task(),
            ));
        }

        self.settings = Some(settings);
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
