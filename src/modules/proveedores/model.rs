use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use terra_core::PaginationParams;

use crate::utils::query::{deserialize_optional_bool, deserialize_optional_text};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateProveedorDto {
    #[validate(length(min = 1, max = 150, message = "El nombre es obligatorio (máximo 150 caracteres)"))]
    pub nombre: String,
    /// Kind of service supplied, e.g. "hotel", "transporte"
    #[validate(length(max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servicio: Option<String>,
    #[validate(length(max = 150))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    #[validate(email(message = "El correo no es válido"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[validate(length(max = 30))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateProveedorDto {
    #[validate(length(min = 1, max = 150, message = "El nombre es obligatorio (máximo 150 caracteres)"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servicio: Option<String>,
    #[validate(length(max = 150))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    #[validate(email(message = "El correo no es válido"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[validate(length(max = 30))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProveedorFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub busqueda: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub servicio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub activo: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ProveedorFilterParams {
    pub fn document(&self) -> Value {
        json!({
            "busqueda": self.busqueda,
            "servicio": self.servicio,
            "activo": self.activo,
            "limit": self.pagination.limit(),
            "offset": self.pagination.offset(),
        })
    }
}
