use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use terra_core::PaginationParams;

use crate::utils::query::{deserialize_optional_bool, deserialize_optional_text};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateClienteDto {
    #[validate(length(min = 1, max = 150, message = "El nombre es obligatorio (máximo 150 caracteres)"))]
    pub nombre: String,
    /// Tax or personal identification number
    #[validate(length(max = 30, message = "La identificación admite máximo 30 caracteres"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identificacion: Option<String>,
    #[validate(email(message = "El correo no es válido"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[validate(length(max = 30, message = "El teléfono admite máximo 30 caracteres"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[validate(length(max = 255, message = "La dirección admite máximo 255 caracteres"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
}

/// Partial update; absent fields are left untouched by `cliente_put`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateClienteDto {
    #[validate(length(min = 1, max = 150, message = "El nombre es obligatorio (máximo 150 caracteres)"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[validate(length(max = 30, message = "La identificación admite máximo 30 caracteres"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identificacion: Option<String>,
    #[validate(email(message = "El correo no es válido"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[validate(length(max = 30, message = "El teléfono admite máximo 30 caracteres"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[validate(length(max = 255, message = "La dirección admite máximo 255 caracteres"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClienteFilterParams {
    /// Matches name or identification
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub busqueda: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub activo: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ClienteFilterParams {
    pub fn document(&self) -> Value {
        json!({
            "busqueda": self.busqueda,
            "activo": self.activo,
            "limit": self.pagination.limit(),
            "offset": self.pagination.offset(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name() {
        let dto: CreateClienteDto = serde_json::from_value(json!({"nombre": ""})).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let dto: CreateClienteDto =
            serde_json::from_value(json!({"nombre": "ACME", "correo": "no-es-correo"})).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let dto: UpdateClienteDto = serde_json::from_value(json!({"activo": false})).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({"activo": false}));
    }

    #[test]
    fn test_filter_document_normalizes_pagination() {
        let filters = ClienteFilterParams {
            busqueda: Some("acme".to_string()),
            pagination: PaginationParams {
                page: Some(3),
                limit: Some(10),
                offset: None,
            },
            ..Default::default()
        };
        let doc = filters.document();
        assert_eq!(doc["busqueda"], "acme");
        assert_eq!(doc["activo"], Value::Null);
        assert_eq!(doc["limit"], 10);
        assert_eq!(doc["offset"], 20);
    }
}
