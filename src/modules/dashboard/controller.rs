use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::dashboard::model::PeriodoParams;
use crate::modules::dashboard::service::DashboardService;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

#[instrument(skip(state))]
pub async fn get_resumen(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<Value>, AppError> {
    let resumen = DashboardService::get_resumen(state.db.as_ref(), auth_user.scope()?).await?;
    Ok(ApiResponse::success(resumen))
}

#[instrument(skip(state))]
pub async fn get_pagos_periodo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(periodo): ValidatedQuery<PeriodoParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let pagos = DashboardService::get_pagos(state.db.as_ref(), &periodo, auth_user.scope()?).await?;
    Ok(ApiResponse::success(pagos))
}
