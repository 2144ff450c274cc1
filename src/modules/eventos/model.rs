use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use validator::{Validate, ValidationError};

use terra_core::PaginationParams;

use crate::utils::query::{deserialize_optional_i32, deserialize_optional_text};

fn validate_rango_fechas(filters: &EventoFilterParams) -> Result<(), ValidationError> {
    match (filters.desde, filters.hasta) {
        (Some(desde), Some(hasta)) if desde > hasta => Err(ValidationError::new("rango_fechas")
            .with_message("La fecha 'desde' no puede ser posterior a 'hasta'".into())),
        _ => Ok(()),
    }
}

/// Audit log filters. Every filter is optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_rango_fechas"))]
pub struct EventoFilterParams {
    /// Event kind, e.g. "CREAR", "EDITAR", "ELIMINAR", "LOGIN"
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub tipo: Option<String>,
    /// Affected entity, e.g. "pagos"
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub entidad: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub id_usuario: Option<i32>,
    #[serde(default)]
    pub desde: Option<NaiveDate>,
    #[serde(default)]
    pub hasta: Option<NaiveDate>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl EventoFilterParams {
    pub fn document(&self) -> Value {
        json!({
            "tipo": self.tipo.as_deref().map(str::to_uppercase),
            "entidad": self.entidad,
            "id_usuario": self.id_usuario,
            "desde": self.desde,
            "hasta": self.hasta,
            "limit": self.pagination.limit(),
            "offset": self.pagination.offset(),
        })
    }
}
