//! Users API
//!
//! A minimal CRUD service for user records:
//! - Create, fetch one, fetch all, delete over a JSON HTTP API
//! - Field validation with aggregated per-field failure messages
//! - Optional seed users loaded from a JSON file at startup

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::SystemClock;
use infrastructure::seed;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state with all services initialized
///
/// The repository starts from the configured seed file when one is set and
/// readable; any seed problem falls back to an empty repository.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let users = config
        .resources
        .users
        .as_deref()
        .and_then(seed::load_users_from_json)
        .unwrap_or_default();

    let repository = Arc::new(InMemoryUserRepository::with_users(users));
    let clock = Arc::new(SystemClock);
    let user_service = UserService::new(repository, Arc::clone(&clock));

    AppState {
        user_service: Arc::new(user_service),
        clock,
    }
}
