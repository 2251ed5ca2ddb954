//! User endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::clock::Clock;
use crate::domain::User;

/// Request to create a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CreateUserApiRequest {
    /// Build the domain user: fresh id, join date stamped from the clock
    fn into_user(self, clock: &dyn Clock) -> User {
        User::new(
            Uuid::new_v4(),
            self.username,
            self.name,
            self.email,
            self.phone,
            clock.now(),
        )
    }
}

/// A single user as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_joined: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            phone: user.phone().to_string(),
            date_joined: user.date_joined(),
        }
    }
}

/// The full list of users
#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %id, "Getting user");

    let user = state
        .user_service
        .get_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.get_all().await.map_err(ApiError::from)?;

    let items = users.iter().map(UserResponse::from).collect();

    Ok(Json(UsersResponse { items }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<UserResponse>), ApiError> {
    debug!(username = %request.username, "Creating user");

    let user = request.into_user(state.clock.as_ref());

    state
        .user_service
        .create(user.clone())
        .await
        .map_err(ApiError::from)?;

    let location = format!("/users/{}", user.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(&user)),
    ))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %id, "Deleting user");

    let deleted = state
        .user_service
        .delete_by_id(id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found());
    }

    Ok(StatusCode::OK)
}
