use axum::{extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::proveedores::model::{CreateProveedorDto, ProveedorFilterParams, UpdateProveedorDto};
use crate::modules::proveedores::service::ProveedorService;
use crate::state::AppState;
use crate::validator::{ApiPath, ApiQuery, ValidatedJson};

#[instrument(skip(state))]
pub async fn get_proveedores(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<ProveedorFilterParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let proveedores = ProveedorService::get_proveedores(state.db.as_ref(), &filters).await?;
    Ok(ApiResponse::success(proveedores))
}

#[instrument(skip(state))]
pub async fn get_proveedor_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let proveedor = ProveedorService::get_proveedor(state.db.as_ref(), id).await?;
    Ok(ApiResponse::success(proveedor))
}

#[instrument(skip(state))]
pub async fn create_proveedor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProveedorDto>,
) -> Result<(StatusCode, ApiResponse<Value>), AppError> {
    let proveedor = ProveedorService::create_proveedor(state.db.as_ref(), dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::created(proveedor))
}

#[instrument(skip(state))]
pub async fn update_proveedor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateProveedorDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let proveedor = ProveedorService::update_proveedor(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(proveedor))
}

#[instrument(skip(state))]
pub async fn delete_proveedor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let deleted = ProveedorService::delete_proveedor(state.db.as_ref(), id, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(deleted))
}
