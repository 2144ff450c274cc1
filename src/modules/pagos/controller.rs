use axum::{extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::pagos::model::{CreatePagoDto, PagoFilterParams, UpdatePagoDto, VerificarPagoDto};
use crate::modules::pagos::service::PagoService;
use crate::state::AppState;
use crate::validator::{ApiPath, ValidatedJson, ValidatedQuery};

#[instrument(skip(state))]
pub async fn get_pagos(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(filters): ValidatedQuery<PagoFilterParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let pagos = PagoService::get_pagos(state.db.as_ref(), &filters, auth_user.scope()?).await?;
    Ok(ApiResponse::success(pagos))
}

#[instrument(skip(state))]
pub async fn get_pago_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let pago = PagoService::get_pago(state.db.as_ref(), id, auth_user.scope()?).await?;
    Ok(ApiResponse::success(pago))
}

#[instrument(skip(state))]
pub async fn create_pago(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePagoDto>,
) -> Result<(StatusCode, ApiResponse<Value>), AppError> {
    let pago = PagoService::create_pago(state.db.as_ref(), dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::created(pago))
}

#[instrument(skip(state))]
pub async fn update_pago(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdatePagoDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let pago = PagoService::update_pago(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(pago))
}

#[instrument(skip(state))]
pub async fn delete_pago(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let deleted = PagoService::delete_pago(state.db.as_ref(), id, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(deleted))
}

#[instrument(skip(state))]
pub async fn verificar_pago(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<VerificarPagoDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let pago = PagoService::verificar_pago(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(pago))
}
