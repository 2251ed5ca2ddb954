//! User domain
//!
//! This module provides the user entity, the repository trait the rest of
//! the system depends on, and the validation rules checked before a user
//! is persisted.

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{FieldErrors, UserValidator};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
