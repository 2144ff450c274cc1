//! Decoding of stored-function results.
//!
//! Functions answer with a JSON document `{status, message, data}`. Older
//! functions use the Spanish field names `estado`, `mensaje` and `datos`, and
//! some report `status` as a boolean or a word instead of an HTTP code; both
//! forms are accepted here so callers only ever see the canonical shape.
//! A result that is not such a document (a bare array, an object without a
//! status, `NULL`) is successful data as-is.

use anyhow::anyhow;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use terra_core::AppError;
use terra_core::errors::{StatusCode, VALIDATION_ERROR};

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionOutcome {
    pub status: u16,
    pub message: Option<String>,
    pub data: Value,
}

#[derive(Deserialize)]
struct RawOutcome {
    #[serde(alias = "estado", deserialize_with = "deserialize_status")]
    status: u16,
    #[serde(default, alias = "mensaje")]
    message: Option<String>,
    #[serde(default, alias = "datos")]
    data: Value,
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let status = match &value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::Bool(true) => Some(200),
        Value::Bool(false) => Some(400),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "ok" | "success" | "exito" | "éxito" => Some(200),
            "error" | "fail" | "fallo" => Some(400),
            other => other.parse().ok(),
        },
        _ => None,
    };

    status
        .filter(|code| (100..=599).contains(code))
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized status: {value}")))
}

fn is_envelope(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key("status") || map.contains_key("estado"))
}

impl FunctionOutcome {
    /// Decodes a raw function result.
    ///
    /// # Errors
    ///
    /// Fails when the document looks like an envelope but its status cannot be
    /// interpreted.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !is_envelope(&value) {
            return Ok(Self {
                status: 200,
                message: None,
                data: value,
            });
        }

        let raw: RawOutcome = serde_json::from_value(value)?;
        Ok(Self {
            status: raw.status,
            message: raw.message,
            data: raw.data,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a failed outcome into the matching [`AppError`] and a successful
    /// one into its data.
    pub fn into_result(self) -> Result<Value, AppError> {
        if self.is_success() {
            return Ok(self.data);
        }

        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "La operación no pudo completarse".to_string());

        let err = match self.status {
            400 | 422 => AppError::validation(anyhow!(message)),
            401 | 403 => AppError::forbidden(message),
            404 => AppError::not_found(anyhow!(message)),
            409 => AppError::conflict(anyhow!(message)),
            status @ 400..=499 => match StatusCode::from_u16(status) {
                Ok(code) => AppError::new(code, VALIDATION_ERROR, anyhow!(message)),
                Err(_) => AppError::validation(anyhow!(message)),
            },
            status => AppError::internal(anyhow!("stored function failed with status {status}: {message}")),
        };

        Err(err)
    }
}
