//! Shared helpers used by the feature modules.
//!
//! - [`password`]: bcrypt hashing on the blocking pool
//! - [`query`]: Lenient query-string parsing
//! - [`stored`]: Stored-function calls with outcome decoding and metrics
//! - [`webhook`]: Outbound notification webhook client

pub mod password;
pub mod query;
pub mod stored;
pub mod webhook;
