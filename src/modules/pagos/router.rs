use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use terra_core::permissions::{
    PAGOS_CREAR, PAGOS_EDITAR, PAGOS_ELIMINAR, PAGOS_LEER, PAGOS_VERIFICAR,
};

use crate::middleware::gate::require_permission;
use crate::state::AppState;

use super::controller::{
    create_pago, delete_pago, get_pago_by_id, get_pagos, update_pago, verificar_pago,
};

pub fn init_pagos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_pagos).route_layer(require_permission(PAGOS_LEER)))
        .route("/", post(create_pago).route_layer(require_permission(PAGOS_CREAR)))
        .route("/{id}", get(get_pago_by_id).route_layer(require_permission(PAGOS_LEER)))
        .route("/{id}", put(update_pago).route_layer(require_permission(PAGOS_EDITAR)))
        .route("/{id}", delete(delete_pago).route_layer(require_permission(PAGOS_ELIMINAR)))
        .route(
            "/{id}/verificar",
            patch(verificar_pago).route_layer(require_permission(PAGOS_VERIFICAR)),
        )
}
