use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::{Validate, ValidationError};

use terra_core::PaginationParams;

use crate::utils::query::{deserialize_optional_bool, deserialize_optional_text};

/// ISO 4217 code: three uppercase letters.
pub(crate) fn validate_moneda(moneda: &str) -> Result<(), ValidationError> {
    if moneda.len() == 3 && moneda.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::new("moneda")
            .with_message("La moneda debe ser un código ISO de 3 letras (ej. CAD)".into()))
    }
}

fn validate_numero_cuenta(numero: &str) -> Result<(), ValidationError> {
    let digits = numero.chars().filter(|c| !matches!(c, ' ' | '-')).count();
    if (4..=34).contains(&digits) && numero.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-')) {
        Ok(())
    } else {
        Err(ValidationError::new("numero_cuenta")
            .with_message("El número de cuenta no es válido".into()))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCuentaBancariaDto {
    #[validate(length(min = 1, max = 100, message = "El banco es obligatorio"))]
    pub banco: String,
    #[validate(custom(function = "validate_numero_cuenta"))]
    pub numero_cuenta: String,
    #[validate(length(min = 1, max = 150, message = "El titular es obligatorio"))]
    pub titular: String,
    #[validate(custom(function = "validate_moneda"))]
    pub moneda: String,
    #[validate(length(max = 50))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_cuenta: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateCuentaBancariaDto {
    #[validate(length(min = 1, max = 100, message = "El banco es obligatorio"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banco: Option<String>,
    #[validate(custom(function = "validate_numero_cuenta"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_cuenta: Option<String>,
    #[validate(length(min = 1, max = 150, message = "El titular es obligatorio"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titular: Option<String>,
    #[validate(custom(function = "validate_moneda"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moneda: Option<String>,
    #[validate(length(max = 50))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_cuenta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CuentaBancariaFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub banco: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub moneda: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub activo: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl CuentaBancariaFilterParams {
    pub fn document(&self) -> Value {
        json!({
            "banco": self.banco,
            "moneda": self.moneda,
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
    fn test_moneda() {
        assert!(validate_moneda("CAD").is_ok());
        assert!(validate_moneda("USD").is_ok());
        assert!(validate_moneda("cad").is_err());
        assert!(validate_moneda("CA").is_err());
        assert!(validate_moneda("CAD1").is_err());
    }

    #[test]
    fn test_numero_cuenta() {
        assert!(validate_numero_cuenta("0012-3456-78").is_ok());
        assert!(validate_numero_cuenta("CA12 3456 7890").is_ok());
        assert!(validate_numero_cuenta("123").is_err());
        assert!(validate_numero_cuenta("12;34;56").is_err());
    }

    #[test]
    fn test_create_dto() {
        let dto: CreateCuentaBancariaDto = serde_json::from_value(json!({
            "banco": "RBC",
            "numero_cuenta": "00123456",
            "titular": "Terra Canada Inc.",
            "moneda": "CAD"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
    }
}
