use axum::{
    Router,
    routing::{get, put},
};

use terra_core::{permissions::ROLES_LEER, roles::ADMINISTRADOR};

use crate::middleware::gate::{require_permission, require_roles};
use crate::state::AppState;

use super::controller::{asignar_permisos, get_permisos, get_rol_by_id, get_roles};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_roles).route_layer(require_permission(ROLES_LEER)))
        .route("/permisos", get(get_permisos).route_layer(require_permission(ROLES_LEER)))
        .route("/{id}", get(get_rol_by_id).route_layer(require_permission(ROLES_LEER)))
        .route(
            "/{id}/permisos",
            put(asignar_permisos).route_layer(require_roles(&[ADMINISTRADOR])),
        )
}
