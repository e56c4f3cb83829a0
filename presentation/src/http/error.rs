//! API error responses
//!
//! Validation failures map to `400`, storage failures to `500`. Both carry a
//! JSON body with an `error` kind the client can branch on.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inorbit_application::{CreateGoalError, GoalStoreError};
use inorbit_domain::ValidationErrors;
use serde::Serialize;
use tracing::error;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

/// Errors returned by route handlers
#[derive(Debug)]
pub enum ApiError {
    /// The payload failed the goal schema
    Validation(ValidationErrors),
    /// The body could not be read as JSON
    MalformedBody(String),
    /// The store failed
    Persistence(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ErrorBody {
        match self {
            ApiError::Validation(fields) => ErrorBody {
                error: "validation",
                message: fields.to_string(),
                fields: Some(fields),
            },
            ApiError::MalformedBody(message) => ErrorBody {
                error: "validation",
                message,
                fields: None,
            },
            ApiError::Persistence(message) => ErrorBody {
                error: "persistence",
                message,
                fields: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self);
        }
        (status, Json(self.into_body())).into_response()
    }
}

impl From<CreateGoalError> for ApiError {
    fn from(error: CreateGoalError) -> Self {
        match error {
            CreateGoalError::Validation(fields) => ApiError::Validation(fields),
            CreateGoalError::Store(e) => e.into(),
        }
    }
}

impl From<GoalStoreError> for ApiError {
    fn from(error: GoalStoreError) -> Self {
        ApiError::Persistence(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}
