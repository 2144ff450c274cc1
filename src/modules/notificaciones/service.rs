use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::metrics::track_webhook_delivery;
use crate::middleware::auth::AuthUser;
use crate::modules::notificaciones::model::{
    EnvioResultado, ResumenPagosDto, TIPO_RESUMEN_PAGOS, WebhookPayload,
};
use crate::utils::stored::{self, json_param};
use crate::utils::webhook::WebhookClient;

pub struct NotificacionService;

impl NotificacionService {
    /// Builds the payment summary, posts it to the email webhook and records
    /// the attempt. A failed delivery is recorded before the error is returned.
    #[instrument(skip(db, webhook, auth_user), fields(user = %auth_user.0.sub))]
    pub async fn enviar_resumen_pagos(
        db: &dyn StoredFunctions,
        webhook: &WebhookClient,
        dto: ResumenPagosDto,
        auth_user: &AuthUser,
    ) -> Result<EnvioResultado, AppError> {
        if !webhook.is_configured() {
            return Err(AppError::internal(anyhow!(
                "WEBHOOK_EMAIL_URL is not configured"
            )));
        }

        let actor = auth_user.user_id()?;
        let datos = stored::call(
            db,
            "pago_get_resumen_correo",
            vec![
                SqlParam::opt_date(dto.desde),
                SqlParam::opt_date(dto.hasta),
                SqlParam::opt_int(auth_user.scope()?),
            ],
        )
        .await?;

        let payload = WebhookPayload {
            tipo: TIPO_RESUMEN_PAGOS.to_string(),
            asunto: dto.asunto(),
            destinatario: dto.destinatario,
            generado_por: auth_user.0.username.clone(),
            generado_en: Utc::now(),
            datos,
        };

        let delivery = webhook.post(&payload).await;
        let enviado = delivery.is_ok();
        track_webhook_delivery(enviado);

        let registro = stored::call(
            db,
            "notificacion_registrar",
            vec![json_param(&payload)?, SqlParam::bool(enviado), SqlParam::int(actor)],
        )
        .await;

        let estado_webhook = match delivery {
            Ok(status) => status,
            Err(err) => {
                if let Err(record_err) = &registro {
                    tracing::error!(error = %record_err, "Failed to record notification attempt");
                }
                return Err(AppError::internal(err.context("Email webhook delivery failed")));
            }
        };

        let registro = registro
            .inspect_err(|err| {
                tracing::error!(error = %err, "Email sent but the delivery record failed");
            })
            .ok();

        tracing::info!(destinatario = %payload.destinatario, "Payment summary sent");

        Ok(EnvioResultado {
            enviado,
            destinatario: payload.destinatario,
            asunto: payload.asunto,
            estado_webhook,
            registro,
        })
    }
}
