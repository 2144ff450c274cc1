use axum::extract::State;
use tracing::instrument;

use terra_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::notificaciones::model::{EnvioResultado, ResumenPagosDto};
use crate::modules::notificaciones::service::NotificacionService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[instrument(skip(state, auth_user))]
pub async fn enviar_resumen_pagos(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ResumenPagosDto>,
) -> Result<ApiResponse<EnvioResultado>, AppError> {
    let resultado =
        NotificacionService::enviar_resumen_pagos(state.db.as_ref(), &state.webhook, dto, &auth_user)
            .await?;
    Ok(ApiResponse::success(resultado))
}
