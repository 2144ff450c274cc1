//! Stored-function gateway.
//!
//! Handlers never write SQL. They name a function and pass typed parameters;
//! the gateway renders `SELECT fn($1::int4, $2::jsonb)::jsonb` and returns the
//! raw JSON document, which [`crate::outcome::FunctionOutcome`] decodes.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Postgres, postgres::PgArguments, query::QueryScalar};
use tracing::instrument;

use crate::params::SqlParam;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("invalid stored function name: {0:?}")]
    InvalidFunctionName(String),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Calls database-resident functions by name.
///
/// Implemented by [`PgStoredFunctions`] in production and by in-memory fakes
/// in tests.
#[async_trait]
pub trait StoredFunctions: Send + Sync {
    /// Invokes `function` with positional `params` and returns its JSON result.
    /// A SQL `NULL` result is returned as [`Value::Null`].
    async fn call(&self, function: &str, params: Vec<SqlParam>) -> Result<Value, DbError>;
}

/// Accepts `name` or `schema.name`, each part `[a-z_][a-z0-9_]*`.
pub fn validate_function_name(name: &str) -> Result<(), DbError> {
    fn valid_part(part: &str) -> bool {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() || first == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }

    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|part| valid_part(part)) {
        return Err(DbError::InvalidFunctionName(name.to_string()));
    }

    Ok(())
}

/// Renders the call statement for `function` with one cast placeholder per parameter.
pub fn build_call_sql(function: &str, params: &[SqlParam]) -> Result<String, DbError> {
    validate_function_name(function)?;

    let placeholders = params
        .iter()
        .enumerate()
        .map(|(i, param)| format!("${}::{}", i + 1, param.pg_type()))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("SELECT {}({})::jsonb AS result", function, placeholders))
}

fn bind_param<'q>(
    query: QueryScalar<'q, Postgres, Option<Value>, PgArguments>,
    param: SqlParam,
) -> QueryScalar<'q, Postgres, Option<Value>, PgArguments> {
    match param {
        SqlParam::Int(value) => query.bind(value),
        SqlParam::Text(value) => query.bind(value),
        SqlParam::Numeric(value) => query.bind(value),
        SqlParam::Bool(value) => query.bind(value),
        SqlParam::Date(value) => query.bind(value),
        SqlParam::Json(value) => query.bind(value),
    }
}

#[derive(Clone, Debug)]
pub struct PgStoredFunctions {
    pool: PgPool,
}

impl PgStoredFunctions {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StoredFunctions for PgStoredFunctions {
    #[instrument(skip(self, params), fields(db.system = "postgresql", params = params.len()))]
    async fn call(&self, function: &str, params: Vec<SqlParam>) -> Result<Value, DbError> {
        let sql = build_call_sql(function, &params)?;

        let mut query = sqlx::query_scalar::<_, Option<Value>>(&sql);
        for param in params {
            query = bind_param(query, param);
        }

        let result = query.fetch_one(&self.pool).await?;
        Ok(result.unwrap_or(Value::Null))
    }
}
