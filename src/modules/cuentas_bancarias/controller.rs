use axum::{extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::cuentas_bancarias::model::{CreateCuentaBancariaDto, CuentaBancariaFilterParams, UpdateCuentaBancariaDto};
use crate::modules::cuentas_bancarias::service::CuentaBancariaService;
use crate::state::AppState;
use crate::validator::{ApiPath, ApiQuery, ValidatedJson};

#[instrument(skip(state))]
pub async fn get_cuentas_bancarias(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<CuentaBancariaFilterParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let cuentas_bancarias = CuentaBancariaService::get_cuentas_bancarias(state.db.as_ref(), &filters).await?;
    Ok(ApiResponse::success(cuentas_bancarias))
}

#[instrument(skip(state))]
pub async fn get_cuenta_bancaria_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let cuenta_bancaria = CuentaBancariaService::get_cuenta_bancaria(state.db.as_ref(), id).await?;
    Ok(ApiResponse::success(cuenta_bancaria))
}

#[instrument(skip(state))]
pub async fn create_cuenta_bancaria(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCuentaBancariaDto>,
) -> Result<(StatusCode, ApiResponse<Value>), AppError> {
    let cuenta_bancaria = CuentaBancariaService::create_cuenta_bancaria(state.db.as_ref(), dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::created(cuenta_bancaria))
}

#[instrument(skip(state))]
pub async fn update_cuenta_bancaria(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateCuentaBancariaDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let cuenta_bancaria = CuentaBancariaService::update_cuenta_bancaria(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(cuenta_bancaria))
}

#[instrument(skip(state))]
pub async fn delete_cuenta_bancaria(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let deleted = CuentaBancariaService::delete_cuenta_bancaria(state.db.as_ref(), id, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(deleted))
}
