//! # Terra Auth
//!
//! Access-token claims and the two operations on them:
//!
//! - [`create_access_token`]: signs a [`Claims`] set for an [`Identity`] at login
//! - [`verify_token`]: checks signature and expiry and returns the typed claims
//!
//! Tokens are HS256 JWTs signed with the shared secret from
//! [`terra_config::JwtConfig`]. Nothing is stored server-side.
//!
//! # Example
//!
//! ```ignore
//! use terra_auth::{Identity, create_access_token, verify_token};
//! use terra_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let issued = create_access_token(&identity, &config)?;
//! let claims = verify_token(&issued.token, &config)?;
//! assert_eq!(claims.username, identity.username);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, Identity};
pub use jwt::{IssuedToken, create_access_token, verify_token};
