//! # Terra Core
//!
//! Core types shared by every Terra Canada crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`response`]: The uniform `{success, data, error, timestamp}` envelope
//! - [`permissions`]: Permission name constants checked by route gates
//! - [`roles`]: Role names and case-insensitive role matching
//! - [`pagination`]: Pagination parameters forwarded to listing functions
//!
//! # Example
//!
//! ```ignore
//! use terra_core::{AppError, ApiResponse};
//!
//! async fn handler() -> Result<ApiResponse<serde_json::Value>, AppError> {
//!     Err(AppError::not_found(anyhow::anyhow!("Cliente no encontrado")))
//! }
//! ```

pub mod errors;
pub mod pagination;
pub mod permissions;
pub mod response;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::PaginationParams;
pub use response::{ApiResponse, ErrorBody};
