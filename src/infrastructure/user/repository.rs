//! In-memory user repository implementation

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Holds the authoritative set of users for the process lifetime as a
/// plain vector, so `get_all` returns records in insertion order. All
/// lookups are linear scans; the collection is small by design.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn contains_username(&self, username: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.username() == username))
    }

    async fn contains_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.id() == id))
    }

    async fn create(&self, user: User) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        users.push(user);
        Ok(true)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;

        let mut matches = users.iter().filter(|u| u.id() == id);
        let found = matches.next().cloned();

        if matches.next().is_some() {
            return Err(DomainError::internal(format!(
                "More than one user stored with id '{id}'"
            )));
        }

        Ok(found)
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        let mut matches = users.iter().enumerate().filter(|(_, u)| u.id() == id);
        let found = matches.next().map(|(index, _)| index);

        if matches.next().is_some() {
            return Err(DomainError::internal(format!(
                "More than one user stored with id '{id}'"
            )));
        }

        match found {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
