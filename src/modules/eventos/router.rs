use axum::{Router, routing::get};

use terra_core::roles::{ADMINISTRADOR, SUPERVISOR};

use crate::middleware::gate::require_roles;
use crate::state::AppState;

use super::controller::get_eventos;

pub fn init_eventos_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_eventos).route_layer(require_roles(&[ADMINISTRADOR, SUPERVISOR])),
    )
}
