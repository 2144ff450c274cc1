//! Calling stored functions from services.
//!
//! Wraps [`StoredFunctions::call`] with timing metrics, decodes the result
//! document and converts failures into [`AppError`]s.

use std::time::Instant;

use anyhow::anyhow;
use serde::Serialize;
use serde_json::Value;

use terra_core::AppError;
use terra_db::{FunctionOutcome, SqlParam, StoredFunctions};

use crate::metrics::track_stored_function;

/// Calls `function` and returns the `data` of a successful outcome.
pub async fn call(
    db: &dyn StoredFunctions,
    function: &str,
    params: Vec<SqlParam>,
) -> Result<Value, AppError> {
    let start = Instant::now();
    let raw = db.call(function, params).await;
    track_stored_function(function, raw.is_ok(), start.elapsed().as_secs_f64());

    let raw = raw.map_err(|e| AppError::internal(anyhow!("{} failed: {}", function, e)))?;

    let outcome = FunctionOutcome::from_value(raw).map_err(|e| {
        AppError::internal(anyhow!("{} returned an unreadable result: {}", function, e))
    })?;

    if !outcome.is_success() {
        tracing::debug!(
            function,
            status = outcome.status,
            message = outcome.message.as_deref().unwrap_or(""),
            "Stored function reported failure"
        );
    }

    outcome.into_result()
}

/// Like [`call`], for single-record lookups: no data means `not_found_message`.
pub async fn call_one(
    db: &dyn StoredFunctions,
    function: &str,
    params: Vec<SqlParam>,
    not_found_message: &str,
) -> Result<Value, AppError> {
    match call(db, function, params).await? {
        Value::Null => Err(AppError::not_found(anyhow!(not_found_message.to_string()))),
        data => Ok(data),
    }
}

/// Serializes a request payload into a `jsonb` parameter.
pub fn json_param<T: Serialize>(value: &T) -> Result<SqlParam, AppError> {
    SqlParam::json(value)
        .map_err(|e| AppError::internal(anyhow!("Failed to serialize parameter: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use terra_core::errors::{INTERNAL_ERROR, NOT_FOUND};
    use terra_db::DbError;

    struct Canned(Result<Value, ()>);

    #[async_trait]
    impl StoredFunctions for Canned {
        async fn call(&self, function: &str, _params: Vec<SqlParam>) -> Result<Value, DbError> {
            self.0
                .clone()
                .map_err(|_| DbError::InvalidFunctionName(function.to_string()))
        }
    }

    #[tokio::test]
    async fn test_call_unwraps_data() {
        let db = Canned(Ok(json!({"status": 200, "data": {"id_cliente": 1}})));
        let data = call(&db, "cliente_get", vec![SqlParam::int(1)]).await.unwrap();
        assert_eq!(data, json!({"id_cliente": 1}));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_internal() {
        let db = Canned(Err(()));
        let err = call(&db, "cliente_get", vec![]).await.unwrap_err();
        assert_eq!(err.code, INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_call_one_null_is_not_found() {
        let db = Canned(Ok(Value::Null));
        let err = call_one(&db, "cliente_get", vec![SqlParam::int(9)], "Cliente no encontrado")
            .await
            .unwrap_err();
        assert_eq!(err.code, NOT_FOUND);
        assert_eq!(err.public_message(), "Cliente no encontrado");
    }

    #[tokio::test]
    async fn test_call_one_envelope_without_data_is_not_found() {
        let db = Canned(Ok(json!({"estado": 200, "datos": null})));
        let err = call_one(&db, "pago_get", vec![], "Pago no encontrado")
            .await
            .unwrap_err();
        assert_eq!(err.code, NOT_FOUND);
    }
}
