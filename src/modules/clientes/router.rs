use axum::{
    Router,
    routing::{delete, get, post, put},
};

use terra_core::permissions::{
    CLIENTES_CREAR, CLIENTES_EDITAR, CLIENTES_ELIMINAR, CLIENTES_LEER,
};

use crate::middleware::gate::require_permission;
use crate::state::AppState;

use super::controller::{
    create_cliente, delete_cliente, get_clientes, get_cliente_by_id, update_cliente,
};

pub fn init_clientes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_clientes).route_layer(require_permission(CLIENTES_LEER)))
        .route("/", post(create_cliente).route_layer(require_permission(CLIENTES_CREAR)))
        .route("/{id}", get(get_cliente_by_id).route_layer(require_permission(CLIENTES_LEER)))
        .route("/{id}", put(update_cliente).route_layer(require_permission(CLIENTES_EDITAR)))
        .route(
            "/{id}",
            delete(delete_cliente).route_layer(require_permission(CLIENTES_ELIMINAR)),
        )
}
