//! User entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_api_key, validate_username, UserValidationError};
use crate::domain::dataset::Dataset;

/// Role of a user on the dataset API
///
/// Reported by `/api/me`; dataset permissions depend on ownership alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    #[default]
    Annotator,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Annotator => write!(f, "annotator"),
        }
    }
}

/// An API user, identified by its API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    role: UserRole,
    /// Never exposed in serialization
    #[serde(skip_serializing, default)]
    api_key: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        role: UserRole,
        api_key: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let username = username.into();
        let api_key = api_key.into();
        validate_username(&username)?;
        validate_api_key(&api_key)?;

        Ok(Self {
            username,
            role,
            api_key,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Only the creator may change or delete a dataset, whatever its role
    pub fn can_manage(&self, dataset: &Dataset) -> bool {
        dataset.is_owned_by(&self.username)
    }
}
