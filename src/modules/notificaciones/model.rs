use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

pub const TIPO_RESUMEN_PAGOS: &str = "resumen_pagos";

fn validate_periodo(dto: &ResumenPagosDto) -> Result<(), ValidationError> {
    match (dto.desde, dto.hasta) {
        (Some(desde), Some(hasta)) if desde > hasta => Err(ValidationError::new("periodo")
            .with_message("La fecha 'desde' no puede ser posterior a 'hasta'".into())),
        _ => Ok(()),
    }
}

/// Body of `POST /notificaciones/resumen-pagos`.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_periodo"))]
pub struct ResumenPagosDto {
    #[validate(email(message = "El destinatario debe ser un correo válido"))]
    pub destinatario: String,
    #[validate(length(min = 1, max = 200, message = "El asunto admite entre 1 y 200 caracteres"))]
    pub asunto: Option<String>,
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
}

impl ResumenPagosDto {
    pub fn asunto(&self) -> String {
        if let Some(asunto) = &self.asunto {
            return asunto.clone();
        }

        match (self.desde, self.hasta) {
            (Some(desde), Some(hasta)) => format!("Resumen de pagos {} al {}", desde, hasta),
            (Some(desde), None) => format!("Resumen de pagos desde {}", desde),
            (None, Some(hasta)) => format!("Resumen de pagos hasta {}", hasta),
            (None, None) => "Resumen de pagos".to_string(),
        }
    }
}

/// Document posted to the email webhook and stored with the delivery record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookPayload {
    pub tipo: String,
    pub destinatario: String,
    pub asunto: String,
    /// Username of the caller who requested the email
    pub generado_por: String,
    pub generado_en: DateTime<Utc>,
    pub datos: Value,
}

#[derive(Debug, Serialize)]
pub struct EnvioResultado {
    pub enviado: bool,
    pub destinatario: String,
    pub asunto: String,
    /// HTTP status the webhook answered with
    pub estado_webhook: u16,
    /// Delivery record written by `notificacion_registrar`, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registro: Option<Value>,
}
