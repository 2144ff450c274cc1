//! Authorization pipeline.
//!
//! Every protected request passes through, in order:
//!
//! 1. [`auth::authenticate`]: verifies the bearer token and stores the
//!    [`auth::AuthUser`] in the request extensions
//! 2. a route gate from [`gate`]: [`gate::require_permission`] or
//!    [`gate::require_roles`], attached to the exact route it protects
//! 3. the handler, which may extract [`auth::AuthUser`]
//!
//! The first failing stage answers with the error envelope; later stages
//! never run.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::{get, post}};
//! use terra_core::permissions;
//!
//! let pagos = Router::new()
//!     .route("/", get(get_pagos).route_layer(require_permission(permissions::PAGOS_LEER)))
//!     .route("/", post(create_pago).route_layer(require_permission(permissions::PAGOS_CREAR)));
//!
//! let api = Router::new()
//!     .nest("/pagos", pagos)
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```

pub mod auth;
pub mod gate;
