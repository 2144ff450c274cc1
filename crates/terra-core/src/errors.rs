//! Application error type.
//!
//! Every failure that reaches the HTTP boundary is an [`AppError`]: an HTTP
//! status, a stable machine-readable code and the underlying error. The
//! response body is always the [`ApiResponse`] envelope.

use anyhow::Error;
use axum::response::{IntoResponse, Response};

pub use axum::http::StatusCode;

use crate::response::ApiResponse;

pub const NO_TOKEN: &str = "NO_TOKEN";
pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
pub const FORBIDDEN: &str = "FORBIDDEN";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFLICT: &str = "CONFLICT";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

const INTERNAL_MESSAGE: &str = "Error interno del servidor";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub code: &'static str,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, code: &'static str, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            code,
            error: err.into(),
        }
    }

    /// Missing or malformed bearer credential.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            NO_TOKEN,
            anyhow::anyhow!(message.into()),
        )
    }

    /// Bearer credential present but its signature, expiry or payload is bad.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            INVALID_TOKEN,
            anyhow::anyhow!(message.into()),
        )
    }

    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            INVALID_CREDENTIALS,
            anyhow::anyhow!("Usuario o contraseña incorrectos"),
        )
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            FORBIDDEN,
            anyhow::anyhow!(message.into()),
        )
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, CONFLICT, err)
    }

    pub fn validation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, VALIDATION_ERROR, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, err)
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Message shown to the client. Server errors never leak their cause.
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!(code = self.code, error = ?self.error, "Request failed");
        }

        let body = ApiResponse::<()>::failure(self.public_message(), self.code);
        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_pairs() {
        let cases = [
            (AppError::unauthenticated("x"), StatusCode::UNAUTHORIZED, NO_TOKEN),
            (AppError::invalid_token("x"), StatusCode::UNAUTHORIZED, INVALID_TOKEN),
            (AppError::invalid_credentials(), StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
            (AppError::forbidden("x"), StatusCode::FORBIDDEN, FORBIDDEN),
            (AppError::not_found(anyhow::anyhow!("x")), StatusCode::NOT_FOUND, NOT_FOUND),
            (AppError::conflict(anyhow::anyhow!("x")), StatusCode::CONFLICT, CONFLICT),
            (AppError::validation(anyhow::anyhow!("x")), StatusCode::BAD_REQUEST, VALIDATION_ERROR),
            (AppError::internal(anyhow::anyhow!("x")), StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status, status);
            assert_eq!(err.code, code);
        }
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal(anyhow::anyhow!("connection refused on 10.0.0.4"));
        assert_eq!(err.public_message(), INTERNAL_MESSAGE);
    }

    #[test]
    fn test_client_message_is_kept() {
        let err = AppError::forbidden("Permiso requerido: pagos.crear");
        assert_eq!(err.public_message(), "Permiso requerido: pagos.crear");
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::unauthenticated("Token no proporcionado").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
