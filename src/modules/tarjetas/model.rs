use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::{Validate, ValidationError};

use terra_core::PaginationParams;

use crate::modules::cuentas_bancarias::model::validate_moneda;
use crate::utils::query::{deserialize_optional_bool, deserialize_optional_text};

/// Only the last four digits of a card are ever stored.
fn validate_ultimos_digitos(digits: &str) -> Result<(), ValidationError> {
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("ultimos_digitos")
            .with_message("Se requieren exactamente los 4 últimos dígitos".into()))
    }
}

fn validate_tipo(tipo: &str) -> Result<(), ValidationError> {
    match tipo {
        "credito" | "debito" | "prepago" => Ok(()),
        _ => Err(ValidationError::new("tipo")
            .with_message("El tipo debe ser credito, debito o prepago".into())),
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTarjetaDto {
    #[validate(length(min = 1, max = 150, message = "El titular es obligatorio"))]
    pub nombre_titular: String,
    #[validate(custom(function = "validate_ultimos_digitos"))]
    pub ultimos_digitos: String,
    #[validate(custom(function = "validate_tipo"))]
    pub tipo: String,
    #[validate(range(min = 0.0, message = "El límite no puede ser negativo"))]
    pub limite_mensual: f64,
    #[validate(range(min = 0.0, message = "El saldo inicial no puede ser negativo"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saldo_inicial: Option<f64>,
    #[validate(custom(function = "validate_moneda"))]
    pub moneda: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateTarjetaDto {
    #[validate(length(min = 1, max = 150, message = "El titular es obligatorio"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_titular: Option<String>,
    #[validate(custom(function = "validate_tipo"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[validate(range(min = 0.0, message = "El límite no puede ser negativo"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limite_mensual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

/// Body of `POST /tarjetas/{id}/cargo`.
#[derive(Debug, Deserialize, Validate)]
pub struct CargoDto {
    #[validate(range(exclusive_min = 0.0, message = "El monto debe ser mayor que cero"))]
    pub monto: f64,
    #[validate(length(max = 255))]
    pub descripcion: Option<String>,
}

/// Body of `POST /tarjetas/{id}/recarga`.
#[derive(Debug, Deserialize, Validate)]
pub struct RecargaDto {
    #[validate(range(exclusive_min = 0.0, message = "El monto debe ser mayor que cero"))]
    pub monto: f64,
    #[validate(length(max = 255))]
    pub descripcion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TarjetaFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub moneda: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub activo: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl TarjetaFilterParams {
    pub fn document(&self) -> Value {
        json!({
            "tipo": self.tipo,
            "moneda": self.moneda,
            "activo": self.activo,
            "limit": self.pagination.limit(),
            "offset": self.pagination.offset(),
        })
    }
}
