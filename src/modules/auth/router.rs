use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::authenticate;
use crate::state::AppState;

use super::controller::{login, me};

/// Login is public; `/me` goes through token verification.
pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new().route("/login", post(login)).route(
        "/me",
        get(me).route_layer(middleware::from_fn_with_state(state, authenticate)),
    )
}
