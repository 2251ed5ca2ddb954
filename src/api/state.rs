//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceApi>,
    pub clock: Arc<dyn Clock>,
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceApi: Send + Sync {
    async fn contains_username(&self, username: &str) -> Result<bool, DomainError>;
    async fn create(&self, user: User) -> Result<bool, DomainError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;
}

#[async_trait]
impl<R, C> UserServiceApi for UserService<R, C>
where
    R: UserRepository + 'static,
    C: Clock + 'static,
{
    async fn contains_username(&self, username: &str) -> Result<bool, DomainError> {
        UserService::contains_username(self, username).await
    }

    async fn create(&self, user: User) -> Result<bool, DomainError> {
        UserService::create(self, user).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        UserService::get_by_id(self, id).await
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        UserService::get_all(self).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        UserService::delete_by_id(self, id).await
    }
}
