//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record
///
/// The id is assigned at creation and never changes. There is no update
/// operation, so the entity carries no mutators; a user either exists in
/// the repository as created or not at all.
///
/// The serialized form uses camelCase keys, matching both the HTTP wire
/// format and the seed file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned at creation
    id: Uuid,
    /// Login name, unique across all users
    username: String,
    /// Display name
    name: String,
    /// Contact email address
    email: String,
    /// Contact phone number, eight digits
    phone: String,
    /// When the user joined
    date_joined: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        id: Uuid,
        username: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        date_joined: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            date_joined,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }
}
