use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_periodo(params: &PeriodoParams) -> Result<(), ValidationError> {
    match (params.desde, params.hasta) {
        (Some(desde), Some(hasta)) if desde > hasta => Err(ValidationError::new("periodo")
            .with_message("La fecha 'desde' no puede ser posterior a 'hasta'".into())),
        _ => Ok(()),
    }
}

/// Reporting window; open ends are decided by the database (current month).
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_periodo"))]
pub struct PeriodoParams {
    #[serde(default)]
    pub desde: Option<NaiveDate>,
    #[serde(default)]
    pub hasta: Option<NaiveDate>,
}
