use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::{Validate, ValidationError};

use terra_core::PaginationParams;

use crate::modules::cuentas_bancarias::model::validate_moneda;
use crate::utils::query::{deserialize_optional_bool, deserialize_optional_i32, deserialize_optional_text};

/// A payment is made either with a card or from a bank account, never both.
fn validate_medio_pago(dto: &CreatePagoDto) -> Result<(), ValidationError> {
    match (dto.id_tarjeta, dto.id_cuenta_bancaria) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        _ => Err(ValidationError::new("medio_pago").with_message(
            "Indique una tarjeta o una cuenta bancaria como medio de pago".into(),
        )),
    }
}

fn validate_rango_fechas(filters: &PagoFilterParams) -> Result<(), ValidationError> {
    match (filters.desde, filters.hasta) {
        (Some(desde), Some(hasta)) if desde > hasta => Err(ValidationError::new("rango_fechas")
            .with_message("La fecha 'desde' no puede ser posterior a 'hasta'".into())),
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_medio_pago"))]
pub struct CreatePagoDto {
    pub id_proveedor: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cliente: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_tarjeta: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cuenta_bancaria: Option<i32>,
    #[validate(range(exclusive_min = 0.0, message = "El monto debe ser mayor que cero"))]
    pub monto: f64,
    #[validate(custom(function = "validate_moneda"))]
    pub moneda: String,
    /// Booking reference the payment settles
    #[validate(length(max = 50))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo_reserva: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_pago: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdatePagoDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_proveedor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cliente: Option<i32>,
    #[validate(range(exclusive_min = 0.0, message = "El monto debe ser mayor que cero"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monto: Option<f64>,
    #[validate(custom(function = "validate_moneda"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moneda: Option<String>,
    #[validate(length(max = 50))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo_reserva: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_pago: Option<NaiveDate>,
}

/// Body of `PATCH /pagos/{id}/verificar`.
#[derive(Debug, Deserialize, Validate)]
pub struct VerificarPagoDto {
    pub verificado: bool,
    #[validate(length(max = 500))]
    pub observacion: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_rango_fechas"))]
pub struct PagoFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub id_proveedor: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub id_cliente: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub verificado: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub codigo_reserva: Option<String>,
    #[serde(default)]
    pub desde: Option<NaiveDate>,
    #[serde(default)]
    pub hasta: Option<NaiveDate>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl PagoFilterParams {
    pub fn document(&self) -> Value {
        json!({
            "id_proveedor": self.id_proveedor,
            "id_cliente": self.id_cliente,
            "verificado": self.verificado,
            "codigo_reserva": self.codigo_reserva,
            "desde": self.desde,
            "hasta": self.hasta,
            "limit": self.pagination.limit(),
            "offset": self.pagination.offset(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pago(id_tarjeta: Option<i32>, id_cuenta_bancaria: Option<i32>, monto: f64) -> CreatePagoDto {
        CreatePagoDto {
            id_proveedor: 1,
            id_cliente: None,
            id_tarjeta,
            id_cuenta_bancaria,
            monto,
            moneda: "CAD".to_string(),
            codigo_reserva: None,
            descripcion: None,
            fecha_pago: None,
        }
    }

    #[test]
    fn test_exactly_one_payment_method() {
        assert!(pago(Some(1), None, 10.0).validate().is_ok());
        assert!(pago(None, Some(2), 10.0).validate().is_ok());
        assert!(pago(None, None, 10.0).validate().is_err());
        assert!(pago(Some(1), Some(2), 10.0).validate().is_err());
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(pago(Some(1), None, 0.0).validate().is_err());
    }

    #[test]
    fn test_date_range() {
        let filters = PagoFilterParams {
            desde: NaiveDate::from_ymd_opt(2025, 3, 1),
            hasta: NaiveDate::from_ymd_opt(2025, 2, 1),
            ..Default::default()
        };
        assert!(filters.validate().is_err());

        let filters = PagoFilterParams {
            desde: NaiveDate::from_ymd_opt(2025, 2, 1),
            hasta: NaiveDate::from_ymd_opt(2025, 2, 1),
            ..Default::default()
        };
        assert!(filters.validate().is_ok());
    }

    #[test]
    fn test_document_dates_are_iso() {
        let filters = PagoFilterParams {
            desde: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        };
        assert_eq!(filters.document()["desde"], "2025-01-15");
    }
}
