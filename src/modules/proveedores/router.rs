use axum::{
    Router,
    routing::{delete, get, post, put},
};

use terra_core::permissions::{
    PROVEEDORES_CREAR, PROVEEDORES_EDITAR, PROVEEDORES_ELIMINAR, PROVEEDORES_LEER,
};

use crate::middleware::gate::require_permission;
use crate::state::AppState;

use super::controller::{
    create_proveedor, delete_proveedor, get_proveedores, get_proveedor_by_id, update_proveedor,
};

pub fn init_proveedores_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_proveedores).route_layer(require_permission(PROVEEDORES_LEER)))
        .route("/", post(create_proveedor).route_layer(require_permission(PROVEEDORES_CREAR)))
        .route("/{id}", get(get_proveedor_by_id).route_layer(require_permission(PROVEEDORES_LEER)))
        .route("/{id}", put(update_proveedor).route_layer(require_permission(PROVEEDORES_EDITAR)))
        .route(
            "/{id}",
            delete(delete_proveedor).route_layer(require_permission(PROVEEDORES_ELIMINAR)),
        )
}
