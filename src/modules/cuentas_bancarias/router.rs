use axum::{
    Router,
    routing::{delete, get, post, put},
};

use terra_core::permissions::{
    CUENTAS_CREAR, CUENTAS_EDITAR, CUENTAS_ELIMINAR, CUENTAS_LEER,
};

use crate::middleware::gate::require_permission;
use crate::state::AppState;

use super::controller::{
    create_cuenta_bancaria, delete_cuenta_bancaria, get_cuentas_bancarias, get_cuenta_bancaria_by_id, update_cuenta_bancaria,
};

pub fn init_cuentas_bancarias_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cuentas_bancarias).route_layer(require_permission(CUENTAS_LEER)))
        .route("/", post(create_cuenta_bancaria).route_layer(require_permission(CUENTAS_CREAR)))
        .route("/{id}", get(get_cuenta_bancaria_by_id).route_layer(require_permission(CUENTAS_LEER)))
        .route("/{id}", put(update_cuenta_bancaria).route_layer(require_permission(CUENTAS_EDITAR)))
        .route(
            "/{id}",
            delete(delete_cuenta_bancaria).route_layer(require_permission(CUENTAS_ELIMINAR)),
        )
}
