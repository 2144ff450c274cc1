use axum::{
    Router,
    routing::{get, patch},
};

use terra_core::roles::ADMINISTRADOR;

use crate::middleware::gate::require_roles;
use crate::state::AppState;

use super::controller::{
    cambiar_contrasena, create_usuario, delete_usuario, get_usuario_by_id, get_usuarios,
    update_usuario,
};

/// User administration is reserved to administrators.
pub fn init_usuarios_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_usuarios).post(create_usuario))
        .route(
            "/{id}",
            get(get_usuario_by_id)
                .put(update_usuario)
                .delete(delete_usuario),
        )
        .route("/{id}/contrasena", patch(cambiar_contrasena))
        .route_layer(require_roles(&[ADMINISTRADOR]))
}
