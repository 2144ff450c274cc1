//! # Terra DB
//!
//! Database access for the Terra Canada API.
//!
//! All business rules live in PostgreSQL stored functions. This crate only
//! knows how to call them:
//!
//! - [`params`]: Typed positional parameters ([`SqlParam`])
//! - [`gateway`]: The [`StoredFunctions`] trait and its PostgreSQL implementation
//! - [`outcome`]: Decoding of the `{status, message, data}` result document
//!
//! # Example
//!
//! ```ignore
//! use terra_db::{PgStoredFunctions, SqlParam, StoredFunctions, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env().unwrap()).await?;
//! let db = PgStoredFunctions::new(pool);
//! let raw = db.call("cliente_get", vec![SqlParam::int(5)]).await?;
//! ```

pub mod gateway;
pub mod outcome;
pub mod params;

use sqlx::postgres::PgPoolOptions;
use terra_config::DatabaseConfig;

pub use gateway::{DbError, PgStoredFunctions, StoredFunctions, build_call_sql, validate_function_name};
pub use outcome::FunctionOutcome;
pub use params::SqlParam;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Creates the PostgreSQL connection pool.
///
/// # Errors
///
/// Returns the connection error if the database is unreachable.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}
