//! Seed users loaded from a JSON file at startup

use std::path::Path;

use tracing::{info, warn};

use crate::domain::User;

/// Load the optional seed list of users
///
/// The file is read once at process start. A missing file, a path without
/// a `.json` extension, or malformed content all yield `None`: the service
/// starts with an empty repository instead of failing. Seeded records are
/// stored as-is, without validation.
pub fn load_users_from_json(path: &Path) -> Option<Vec<User>> {
    if !path.exists() {
        warn!(path = %path.display(), "Seed file not found, starting empty");
        return None;
    }

    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        warn!(path = %path.display(), "Seed file is not a .json file, starting empty");
        return None;
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            warn!(path = %path.display(), %error, "Failed to read seed file, starting empty");
            return None;
        }
    };

    match serde_json::from_str::<Vec<User>>(&raw) {
        Ok(users) => {
            info!(path = %path.display(), count = users.len(), "Loaded seed users");
            Some(users)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "Seed file is not valid JSON, starting empty");
            None
        }
    }
}
