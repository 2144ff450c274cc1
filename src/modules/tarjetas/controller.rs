use axum::{extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::tarjetas::model::{
    CargoDto, CreateTarjetaDto, RecargaDto, TarjetaFilterParams, UpdateTarjetaDto,
};
use crate::modules::tarjetas::service::TarjetaService;
use crate::state::AppState;
use crate::validator::{ApiPath, ApiQuery, ValidatedJson};

#[instrument(skip(state))]
pub async fn get_tarjetas(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<TarjetaFilterParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let tarjetas = TarjetaService::get_tarjetas(state.db.as_ref(), &filters).await?;
    Ok(ApiResponse::success(tarjetas))
}

#[instrument(skip(state))]
pub async fn get_tarjeta_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let tarjeta = TarjetaService::get_tarjeta(state.db.as_ref(), id).await?;
    Ok(ApiResponse::success(tarjeta))
}

#[instrument(skip(state))]
pub async fn create_tarjeta(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTarjetaDto>,
) -> Result<(StatusCode, ApiResponse<Value>), AppError> {
    let tarjeta = TarjetaService::create_tarjeta(state.db.as_ref(), dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::created(tarjeta))
}

#[instrument(skip(state))]
pub async fn update_tarjeta(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateTarjetaDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let tarjeta = TarjetaService::update_tarjeta(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(tarjeta))
}

#[instrument(skip(state))]
pub async fn delete_tarjeta(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<ApiResponse<Value>, AppError> {
    let deleted = TarjetaService::delete_tarjeta(state.db.as_ref(), id, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(deleted))
}

#[instrument(skip(state))]
pub async fn realizar_cargo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<CargoDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let tarjeta = TarjetaService::realizar_cargo(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(tarjeta))
}

#[instrument(skip(state))]
pub async fn recargar_tarjeta(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(dto): ValidatedJson<RecargaDto>,
) -> Result<ApiResponse<Value>, AppError> {
    let tarjeta = TarjetaService::recargar(state.db.as_ref(), id, dto, auth_user.user_id()?).await?;
    Ok(ApiResponse::success(tarjeta))
}
