use axum::{Router, routing::get};

use terra_core::permissions::DASHBOARD_LEER;

use crate::middleware::gate::require_permission;
use crate::state::AppState;

use super::controller::{get_pagos_periodo, get_resumen};

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/resumen", get(get_resumen))
        .route("/pagos", get(get_pagos_periodo))
        .route_layer(require_permission(DASHBOARD_LEER))
}
