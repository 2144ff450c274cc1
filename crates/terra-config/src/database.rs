//! PostgreSQL connection settings.
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)

use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Returns `None` when `DATABASE_URL` is missing.
    pub fn from_env() -> Option<Self> {
        let url = env::var("DATABASE_URL").ok()?;
        Some(Self {
            url,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
        })
    }
}
