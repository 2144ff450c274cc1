use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn validate_permission_ids(ids: &[i32]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| *id <= 0) {
        return Err(ValidationError::new("permisos")
            .with_message("Los identificadores de permiso deben ser positivos".into()));
    }

    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != ids.len() {
        return Err(ValidationError::new("permisos")
            .with_message("La lista de permisos contiene duplicados".into()));
    }

    Ok(())
}

/// Replaces the whole permission set of a role. An empty list revokes all.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AsignarPermisosDto {
    #[validate(custom(function = "validate_permission_ids"))]
    pub permisos: Vec<i32>,
}
