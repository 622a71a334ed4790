//! In-memory user directory

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// Fixed set of users indexed by API key
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the directory, rejecting duplicate usernames or API keys
    pub fn with_users(users: Vec<User>) -> Result<Self, DomainError> {
        let mut repository = Self::new();

        for user in users {
            if repository
                .users
                .values()
                .any(|u| u.username() == user.username())
            {
                return Err(DomainError::conflict(format!(
                    "User '{}' is defined more than once",
                    user.username()
                )));
            }

            if repository.users.contains_key(user.api_key()) {
                return Err(DomainError::conflict(format!(
                    "API key of user '{}' is already assigned to another user",
                    user.username()
                )));
            }

            repository.users.insert(user.api_key().to_string(), user);
        }

        Ok(repository)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(api_key).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;

    fn user(name: &str, role: UserRole) -> User {
        User::new(name, role, format!("{}.apikey", name)).unwrap()
    }

    #[tokio::test]
    async fn test_find_by_api_key() {
        let repo = InMemoryUserRepository::with_users(vec![
            user("admin", UserRole::Admin),
            user("mock-user", UserRole::Annotator),
        ])
        .unwrap();

        let found = repo.find_by_api_key("mock-user.apikey").await.unwrap();
        assert_eq!(found.unwrap().username(), "mock-user");

        assert!(repo.find_by_api_key("unknown.apikey").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_sorted() {
        let repo = InMemoryUserRepository::with_users(vec![
            user("zoe", UserRole::Annotator),
            user("admin", UserRole::Admin),
        ])
        .unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|u| u.username().to_string())
            .collect();
        assert_eq!(names, vec!["admin", "zoe"]);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let result = InMemoryUserRepository::with_users(vec![
            user("admin", UserRole::Admin),
            User::new("admin", UserRole::Annotator, "other.apikey").unwrap(),
        ]);
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[test]
    fn test_duplicate_api_key_rejected() {
        let result = InMemoryUserRepository::with_users(vec![
            User::new("alice", UserRole::Admin, "shared.apikey").unwrap(),
            User::new("bob", UserRole::Annotator, "shared.apikey").unwrap(),
        ]);
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }
}
