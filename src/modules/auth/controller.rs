use axum::extract::State;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::{LoginRequest, LoginResponse, UsuarioPerfil};
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, AppError> {
    let response = AuthService::login(state.db.as_ref(), &state.jwt_config, dto).await?;
    Ok(ApiResponse::success(response))
}

/// Profile straight from the verified token; no database round trip.
#[instrument]
pub async fn me(auth_user: AuthUser) -> Result<ApiResponse<UsuarioPerfil>, AppError> {
    Ok(ApiResponse::success(UsuarioPerfil::from(&auth_user.0)))
}
