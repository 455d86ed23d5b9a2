use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::repositories::DynUserRepository;
use crate::domain::user::User;

/// Request body for creating a user
///
/// Carries the name only; the id is generated server-side.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
}

/// Wire-facing projection of a user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
        }
    }
}

/// Get a user by ID
///
/// GET /users/:id
pub async fn get_user(
    State(repo): State<DynUserRepository>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = repo.find_by_id(id).await.ok_or(ApiError::NotFound(id))?;

    Ok(Json(UserResponse::from(&user)))
}

/// Get all users
///
/// GET /users
pub async fn get_users(State(repo): State<DynUserRepository>) -> Json<Vec<UserResponse>> {
    let users = repo.find_all().await;

    Json(users.iter().map(UserResponse::from).collect())
}

/// Create a new user
///
/// POST /users
///
/// The handler owns id generation: it assembles the full user before
/// delegating, and on success answers with that same value rather than
/// re-reading the store. The Location header points at the new resource.
pub async fn create_user(
    State(repo): State<DynUserRepository>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<UserResponse>), ApiError> {
    let user = User {
        id: Uuid::new_v4(),
        full_name: req.full_name,
    };

    if !repo.create(user.clone()).await {
        return Err(ApiError::CreateRejected(user.id));
    }

    let location = format!("/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(&user)),
    ))
}

/// Delete a user by ID
///
/// DELETE /users/:id
pub async fn delete_user(
    State(repo): State<DynUserRepository>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !repo.delete(id).await {
        return Err(ApiError::NotFound(id));
    }

    Ok(StatusCode::OK)
}
