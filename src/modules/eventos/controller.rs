use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::modules::eventos::model::EventoFilterParams;
use crate::modules::eventos::service::EventoService;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

#[instrument(skip(state))]
pub async fn get_eventos(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<EventoFilterParams>,
) -> Result<ApiResponse<Value>, AppError> {
    let eventos = EventoService::get_eventos(state.db.as_ref(), &filters).await?;
    Ok(ApiResponse::success(eventos))
}
