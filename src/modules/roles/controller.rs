use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::roles::model::AsignarPermisosDto;
use crate::modules::roles::service::RolService;
use crate::state::AppState;
use crate::validator::{ApiPath, ValidatedJson};

#[instrument(skip(state))]
pub async fn get_roles(State(state): State<AppState>) -> Result<ApiResponse<Value>, AppError> {
    let roles = RolService::get_roles(state.db.as_ref()).await?;
    Ok(ApiResponse::success(roles))
}

#[instrument(skip(state))]
pub async fn get_rol_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let rol = RolService::get_rol(state.db.as_ref(), id).await?;
    Ok(ApiResponse::success(rol))
}

#[instrument(skip(state))]
pub async fn get_permisos(State(state): State<AppState>) -> Result<ApiResponse<Value>, AppError> {
    let permisos = RolService::get_permisos(state.db.as_ref()).await?;
    Ok(ApiResponse::success(permisos))
}

#[instrument(skip(state))]
pub async fn asignar_permisos(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<AsignarPermisosDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let rol = RolService::asignar_permisos(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(rol))
}
