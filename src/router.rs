use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use terra_core::{ApiResponse, AppError};

use crate::logging::{REQUEST_ID_HEADER, logging_middleware};
use crate::metrics::metrics_middleware;
use crate::middleware::auth::authenticate;
use crate::modules::auth::init_auth_router;
use crate::modules::clientes::init_clientes_router;
use crate::modules::cuentas_bancarias::init_cuentas_bancarias_router;
use crate::modules::dashboard::init_dashboard_router;
use crate::modules::eventos::init_eventos_router;
use crate::modules::notificaciones::init_notificaciones_router;
use crate::modules::pagos::init_pagos_router;
use crate::modules::proveedores::init_proveedores_router;
use crate::modules::roles::init_roles_router;
use crate::modules::tarjetas::init_tarjetas_router;
use crate::modules::usuarios::init_usuarios_router;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> ApiResponse<HealthStatus> {
    ApiResponse::success(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn route_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Ruta no encontrada"))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .allow_credentials(true)
}

/// Every `/api` route except login and health goes through [`authenticate`].
pub fn init_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/clientes", init_clientes_router())
        .nest("/proveedores", init_proveedores_router())
        .nest("/tarjetas", init_tarjetas_router())
        .nest("/cuentas-bancarias", init_cuentas_bancarias_router())
        .nest("/pagos", init_pagos_router())
        .nest("/usuarios", init_usuarios_router())
        .nest("/roles", init_roles_router())
        .nest("/eventos", init_eventos_router())
        .nest("/dashboard", init_dashboard_router())
        .nest("/notificaciones", init_notificaciones_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health_check))
                .nest("/auth", init_auth_router(state.clone()))
                .merge(protected),
        )
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
