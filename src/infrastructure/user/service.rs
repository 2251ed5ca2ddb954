//! User service
//!
//! The sole entry point the HTTP layer talks to: validation runs before any
//! mutation, everything else delegates to the repository.

use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::user::{User, UserRepository, UserValidator};
use crate::domain::DomainError;

/// Orchestrates validation and repository access for user records
#[derive(Debug)]
pub struct UserService<R: UserRepository, C: Clock> {
    repository: Arc<R>,
    validator: UserValidator<R, C>,
    // Serializes the validate + insert sequence so two concurrent creates
    // with the same username cannot both pass the uniqueness check.
    create_guard: Mutex<()>,
}

impl<R: UserRepository, C: Clock> UserService<R, C> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        let validator = UserValidator::new(Arc::clone(&repository), clock);

        Self {
            repository,
            validator,
            create_guard: Mutex::new(()),
        }
    }

    /// Check whether a username is already taken
    pub async fn contains_username(&self, username: &str) -> Result<bool, DomainError> {
        self.repository.contains_username(username).await
    }

    /// Validate and persist a new user
    ///
    /// On any rule violation the repository is left untouched and the
    /// aggregated field errors are returned as `DomainError::Validation`.
    pub async fn create(&self, user: User) -> Result<bool, DomainError> {
        let _guard = self.create_guard.lock().await;

        self.validator.validate(&user).await?;
        self.repository.create(user).await
    }

    /// Get a user by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.repository.get_by_id(id).await
    }

    /// All current users, in insertion order
    pub async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        self.repository.get_all().await
    }

    /// Delete a user by id; true iff a record existed and was removed
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::fixed::FixedClock;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::user::InMemoryUserRepository;
    use chrono::{TimeZone, Utc};

    fn test_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        ))
    }

    fn create_service() -> UserService<InMemoryUserRepository, FixedClock> {
        UserService::new(Arc::new(InMemoryUserRepository::new()), test_clock())
    }

    fn make_user(username: &str) -> User {
        User::new(
            Uuid::new_v4(),
            username,
            "John Doe X",
            "j@x.com",
            "12345678",
            test_clock().now(),
        )
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equivalent_record() {
        let service = create_service();
        let user = make_user("johndoe1");

        let created = service.create(user.clone()).await.unwrap();
        assert!(created);

        let retrieved = service.get_by_id(user.id()).await.unwrap();
        assert_eq!(retrieved, Some(user));
    }

    #[tokio::test]
    async fn test_create_preserves_date_joined() {
        let service = create_service();
        let user = make_user("johndoe1");

        service.create(user.clone()).await.unwrap();

        let retrieved = service.get_by_id(user.id()).await.unwrap().unwrap();
        assert_eq!(
            retrieved.date_joined(),
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_create_invalid_user_leaves_repository_unchanged() {
        let service = create_service();
        let invalid = User::new(
            Uuid::new_v4(),
            "short",
            "John Doe X",
            "j@x.com",
            "12a45678",
            test_clock().now(),
        );

        let result = service.create(invalid).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        let all = service.get_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_username_fails_validation() {
        let service = create_service();

        service.create(make_user("johndoe1")).await.unwrap();

        let result = service.create(make_user("johndoe1")).await;

        match result.unwrap_err() {
            DomainError::Validation { errors } => {
                assert_eq!(
                    errors.get("username").unwrap(),
                    &["Username already exists".to_string()]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        // Only the first create mutated the repository
        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_create_future_date_joined_fails_validation() {
        let service = create_service();
        let future = User::new(
            Uuid::new_v4(),
            "johndoe1",
            "John Doe X",
            "j@x.com",
            "12345678",
            Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap(),
        );

        let result = service.create(future).await;

        match result.unwrap_err() {
            DomainError::Validation { errors } => {
                assert!(errors.get("dateJoined").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_username_creates_exactly_one() {
        let service = Arc::new(create_service());

        let first = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.create(make_user("johndoe1")).await })
        };
        let second = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.create(make_user("johndoe1")).await })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();

        assert_eq!(successes, 1);
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_contains_username() {
        let service = create_service();

        assert!(!service.contains_username("johndoe1").await.unwrap());

        service.create(make_user("johndoe1")).await.unwrap();

        assert!(service.contains_username("johndoe1").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_id_absent() {
        let service = create_service();

        let retrieved = service.get_by_id(Uuid::new_v4()).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_get_all_after_n_creations() {
        let service = create_service();

        let all = service.get_all().await.unwrap();
        assert!(all.is_empty());

        for username in ["user0001", "user0002", "user0003"] {
            service.create(make_user(username)).await.unwrap();
        }

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let service = create_service();
        let user = make_user("johndoe1");
        service.create(user.clone()).await.unwrap();

        let deleted = service.delete_by_id(user.id()).await.unwrap();
        assert!(deleted);
        assert!(service.get_by_id(user.id()).await.unwrap().is_none());

        let deleted = service.delete_by_id(user.id()).await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let repository = Arc::new(MockUserRepository::new());
        let service = UserService::new(Arc::clone(&repository), test_clock());

        repository.set_should_fail(true).await;

        let result = service.get_all().await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));

        let result = service.create(make_user("johndoe1")).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
