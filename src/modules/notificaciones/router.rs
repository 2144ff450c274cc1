use axum::{Router, routing::post};

use terra_core::permissions::NOTIFICACIONES_ENVIAR;

use crate::middleware::gate::require_permission;
use crate::state::AppState;

use super::controller::enviar_resumen_pagos;

pub fn init_notificaciones_router() -> Router<AppState> {
    Router::new().route(
        "/resumen-pagos",
        post(enviar_resumen_pagos).route_layer(require_permission(NOTIFICACIONES_ENVIAR)),
    )
}
