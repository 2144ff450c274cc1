//! # Terra Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing secret and lifetime
//! - [`cors`]: Allowed browser origins
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: Listen address
//! - [`webhook`]: Outbound email webhook
//!
//! # Example
//!
//! ```ignore
//! use terra_config::{JwtConfig, CorsConfig, WebhookConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let webhook_config = WebhookConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;
pub mod webhook;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use webhook::WebhookConfig;

/// Reads and parses an environment variable, falling back to `default`.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Reads an environment variable, treating blank values as unset.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
