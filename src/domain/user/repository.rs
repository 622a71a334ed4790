//! User lookup trait

use async_trait::async_trait;

use super::entity::User;
use crate::domain::DomainError;

/// Read-only directory of API users
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Resolve the user owning an API key
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, DomainError>;

    /// List all users sorted by username
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
