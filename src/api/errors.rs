use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// Declining outcomes of the request layer
///
/// Exactly two requests are declined at this layer: looking up an id that is
/// not there, and a create the store refused. Anything else propagates
/// through the hosting framework.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no user with id {0}")]
    NotFound(Uuid),

    #[error("store rejected user {0}")]
    CreateRejected(Uuid),
}

impl ApiError {
    /// HTTP status this outcome maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CreateRejected(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Declined requests answer with the bare status code. The detail,
        // including any id generated on the create path, stays in the logs.
        tracing::debug!("request declined: {}", self);
        self.status().into_response()
    }
}
