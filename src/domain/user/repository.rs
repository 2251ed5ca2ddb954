//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// The reference backend is synchronous and in-memory, but the contract is
/// async and fallible so a networked or persistent backend can replace it
/// without touching callers.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Check whether any stored user has exactly this username
    async fn contains_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether a user with this id is stored
    async fn contains_id(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Append a user
    ///
    /// No uniqueness is enforced at this layer; callers validate first.
    async fn create(&self, user: User) -> Result<bool, DomainError>;

    /// Get the single user with this id, if stored
    ///
    /// More than one record sharing an id is an invariant violation and is
    /// reported as an internal error, never silently resolved.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// All current users, in insertion order
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;

    /// Remove the single user with this id
    ///
    /// Returns true if a record was removed, false if no record matched.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;
}
