use axum::{
    Router,
    routing::{delete, get, post, put},
};

use terra_core::permissions::{
    TARJETAS_CARGAR, TARJETAS_CREAR, TARJETAS_EDITAR, TARJETAS_ELIMINAR, TARJETAS_LEER,
    TARJETAS_RECARGAR,
};

use crate::middleware::gate::require_permission;
use crate::state::AppState;

use super::controller::{
    create_tarjeta, delete_tarjeta, get_tarjeta_by_id, get_tarjetas, realizar_cargo,
    recargar_tarjeta, update_tarjeta,
};

pub fn init_tarjetas_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_tarjetas).route_layer(require_permission(TARJETAS_LEER)))
        .route("/", post(create_tarjeta).route_layer(require_permission(TARJETAS_CREAR)))
        .route("/{id}", get(get_tarjeta_by_id).route_layer(require_permission(TARJETAS_LEER)))
        .route("/{id}", put(update_tarjeta).route_layer(require_permission(TARJETAS_EDITAR)))
        .route(
            "/{id}",
            delete(delete_tarjeta).route_layer(require_permission(TARJETAS_ELIMINAR)),
        )
        .route(
            "/{id}/cargo",
            post(realizar_cargo).route_layer(require_permission(TARJETAS_CARGAR)),
        )
        .route(
            "/{id}/recarga",
            post(recargar_tarjeta).route_layer(require_permission(TARJETAS_RECARGAR)),
        )
}
