use std::env;

use crate::env_or;

/// Placeholder secret used when `JWT_SECRET` is not set.
pub const DEFAULT_SECRET: &str = "change-me-terra-canada-secret";

/// Longest accepted token lifetime: one year.
pub const MAX_EXPIRY: i64 = 365 * 86_400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            expiry: env_or("JWT_EXPIRY", 86_400_i64).clamp(1, MAX_EXPIRY), // 24 hours
        }
    }

    /// Token lifetime in seconds, bounded to `0..=MAX_EXPIRY`.
    pub fn lifetime(&self) -> i64 {
        self.expiry.clamp(0, MAX_EXPIRY)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
