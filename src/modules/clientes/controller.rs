use axum::{extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::clientes::model::{CreateClienteDto, ClienteFilterParams, UpdateClienteDto};
use crate::modules::clientes::service::ClienteService;
use crate::state::AppState;
use crate::validator::{ApiPath, ApiQuery, ValidatedJson};

#[instrument(skip(state))]
pub async fn get_clientes(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<ClienteFilterParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let clientes = ClienteService::get_clientes(state.db.as_ref(), &filters).await?;
    Ok(ApiResponse::success(clientes))
}

#[instrument(skip(state))]
pub async fn get_cliente_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let cliente = ClienteService::get_cliente(state.db.as_ref(), id).await?;
    Ok(ApiResponse::success(cliente))
}

#[instrument(skip(state))]
pub async fn create_cliente(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateClienteDto>,
) -> Result<(StatusCode, ApiResponse<Value>), AppError> {
    let cliente = ClienteService::create_cliente(state.db.as_ref(), dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::created(cliente))
}

#[instrument(skip(state))]
pub async fn update_cliente(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateClienteDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let cliente = ClienteService::update_cliente(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(cliente))
}

#[instrument(skip(state))]
pub async fn delete_cliente(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let deleted = ClienteService::delete_cliente(state.db.as_ref(), id, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(deleted))
}
