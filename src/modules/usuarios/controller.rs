use axum::{extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::usuarios::model::{
    CambiarContrasenaDto, CreateUsuarioDto, UpdateUsuarioDto, UsuarioFilterParams,
};
use crate::modules::usuarios::service::UsuarioService;
use crate::state::AppState;
use crate::validator::{ApiPath, ApiQuery, ValidatedJson};

#[instrument(skip(state))]
pub async fn get_usuarios(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<UsuarioFilterParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let usuarios = UsuarioService::get_usuarios(state.db.as_ref(), &filters).await?;
    Ok(ApiResponse::success(usuarios))
}

#[instrument(skip(state))]
pub async fn get_usuario_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let usuario = UsuarioService::get_usuario(state.db.as_ref(), id).await?;
    Ok(ApiResponse::success(usuario))
}

#[instrument(skip(state))]
pub async fn create_usuario(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateUsuarioDto>,
) -> Result<(StatusCode, ApiResponse<Value>), AppError> {
    let usuario = UsuarioService::create_usuario(state.db.as_ref(), dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::created(usuario))
}

#[instrument(skip(state))]
pub async fn update_usuario(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateUsuarioDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let usuario =
        UsuarioService::update_usuario(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(usuario))
}

#[instrument(skip(state))]
pub async fn delete_usuario(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let actor = auth_user.user_id()?;
    if actor == id {
        return Err(AppError::validation(anyhow::anyhow!(
            "No puede eliminar su propio usuario"
        )));
    }

    let deleted = UsuarioService::delete_usuario(state.db.as_ref(), id, actor).await?;
    Ok(ApiResponse::success(deleted))
}

#[instrument(skip(state))]
pub async fn cambiar_contrasena(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<CambiarContrasenaDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let result =
        UsuarioService::cambiar_contrasena(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(result))
}
