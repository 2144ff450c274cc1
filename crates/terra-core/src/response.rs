//! Uniform response envelope.
//!
//! Every endpoint, successful or not, answers with:
//!
//! ```json
//! { "success": true, "data": { ... }, "timestamp": "2025-01-01T00:00:00Z" }
//! { "success": false, "error": { "message": "...", "code": "FORBIDDEN" }, "timestamp": "..." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>, code: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                message: message.into(),
                code: Some(code.to_string()),
            }),
            timestamp: Utc::now(),
        }
    }

    /// Pairs the envelope with `201 Created`.
    pub fn created(data: T) -> (StatusCode, Self) {
        (StatusCode::CREATED, Self::success(data))
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
