//! User validation
//!
//! Every rule on every field is evaluated and all failures are collected
//! into one [`FieldErrors`] map; a single broken rule never masks the
//! others. Uniqueness and join-date rules consult the repository and the
//! clock, both injected through the constructor.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::entity::User;
use super::repository::UserRepository;
use crate::domain::clock::Clock;
use crate::domain::DomainError;

/// Username and name lengths must fall within this range, inclusive
const MIN_NAME_LENGTH: usize = 8;
const MAX_NAME_LENGTH: usize = 20;

/// Phone numbers are exactly this long
const PHONE_LENGTH: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9]+$").unwrap());

/// Aggregated validation failures: field name -> ordered failure messages
///
/// Serializes as a plain JSON object, which is exactly the `errors` member
/// of the 400 response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure message against a field
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one failure
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded against a field, in the order the rules ran
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// Rule set checked against a user record before creation
#[derive(Debug)]
pub struct UserValidator<R: UserRepository, C: Clock> {
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R: UserRepository, C: Clock> UserValidator<R, C> {
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validate a candidate user
    ///
    /// Returns `DomainError::Validation` carrying the full field -> messages
    /// map when any rule fails. Repository lookups that fail bubble up
    /// unchanged.
    pub async fn validate(&self, user: &User) -> Result<(), DomainError> {
        let mut errors = FieldErrors::new();

        self.check_username(user.username(), &mut errors).await?;
        check_name(user.name(), &mut errors);
        check_email(user.email(), &mut errors);
        check_phone(user.phone(), &mut errors);
        self.check_date_joined(user.date_joined(), &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(errors))
        }
    }

    async fn check_username(
        &self,
        username: &str,
        errors: &mut FieldErrors,
    ) -> Result<(), DomainError> {
        if username.is_empty() {
            errors.push("username", "Username is required");
        }
        if !length_between(username, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
            errors.push(
                "username",
                "The length of the username must be between 8 to 20 characters.",
            );
        }
        if self.repository.contains_username(username).await? {
            errors.push("username", "Username already exists");
        }

        Ok(())
    }

    fn check_date_joined(&self, date_joined: DateTime<Utc>, errors: &mut FieldErrors) {
        // The epoch default counts as "not set"
        if date_joined == DateTime::<Utc>::default() {
            errors.push("dateJoined", "Date joined is required");
        }
        if date_joined > self.clock.now() {
            errors.push("dateJoined", "A valid join date is required");
        }
    }
}

/// Length in Unicode scalar values, not bytes
fn length_between(value: &str, min: usize, max: usize) -> bool {
    let length = value.chars().count();
    (min..=max).contains(&length)
}

fn check_name(name: &str, errors: &mut FieldErrors) {
    if name.is_empty() {
        errors.push("name", "Name is required");
    }
    if !length_between(name, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        errors.push(
            "name",
            "The length of the name must be between 8 to 20 characters.",
        );
    }
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.push("email", "Email address is required");
    }
    if !EMAIL_PATTERN.is_match(email) {
        errors.push("email", "A valid email address is required");
    }
}

fn check_phone(phone: &str, errors: &mut FieldErrors) {
    if phone.is_empty() {
        errors.push("phone", "Phone number is required");
    }
    if phone.chars().count() != PHONE_LENGTH {
        errors.push("phone", "Phone number can only contain 8 characters");
    }
    if !PHONE_PATTERN.is_match(phone) {
        errors.push("phone", "A valid phone number is required");
    }
}
