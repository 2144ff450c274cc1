use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use terra_core::PaginationParams;

use crate::utils::query::{deserialize_optional_bool, deserialize_optional_i32, deserialize_optional_text};

/// Keys that may carry a password hash in stored-function results.
const HASH_KEYS: [&str; 2] = ["contrasena_hash", "password_hash"];

#[derive(Deserialize, Validate)]
pub struct CreateUsuarioDto {
    #[validate(length(min = 3, max = 50, message = "El nombre de usuario debe tener entre 3 y 50 caracteres"))]
    pub nombre_usuario: String,
    #[validate(email(message = "El correo no es válido"))]
    pub correo: String,
    #[validate(length(min = 1, max = 150, message = "El nombre completo es obligatorio"))]
    pub nombre_completo: String,
    #[validate(length(min = 8, max = 128, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub contrasena: String,
    pub id_rol: i32,
    #[serde(default)]
    pub activo: Option<bool>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateUsuarioDto {
    #[validate(length(min = 3, max = 50, message = "El nombre de usuario debe tener entre 3 y 50 caracteres"))]
    pub nombre_usuario: Option<String>,
    #[validate(email(message = "El correo no es válido"))]
    pub correo: Option<String>,
    #[validate(length(min = 1, max = 150, message = "El nombre completo es obligatorio"))]
    pub nombre_completo: Option<String>,
    #[validate(length(min = 8, max = 128, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub contrasena: Option<String>,
    pub id_rol: Option<i32>,
    pub activo: Option<bool>,
}

/// Body of `PATCH /usuarios/{id}/contrasena`.
#[derive(Deserialize, Validate)]
pub struct CambiarContrasenaDto {
    #[validate(length(min = 8, max = 128, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub contrasena_nueva: String,
}

macro_rules! redacted_debug {
    ($ty:ident { $($field:ident),* }) => {
        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    $(.field(stringify!($field), &self.$field))*
                    .finish_non_exhaustive()
            }
        }
    };
}

redacted_debug!(CreateUsuarioDto { nombre_usuario, correo, id_rol, activo });
redacted_debug!(UpdateUsuarioDto { nombre_usuario, correo, id_rol, activo });
redacted_debug!(CambiarContrasenaDto {});

/// Document sent to `usuario_post` / `usuario_put`: the plain password is
/// replaced by its bcrypt hash.
#[derive(Debug, Serialize)]
pub struct UsuarioPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_usuario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_completo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrasena_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_rol: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UsuarioFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub busqueda: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub id_rol: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub activo: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl UsuarioFilterParams {
    pub fn document(&self) -> Value {
        json!({
            "busqueda": self.busqueda,
            "id_rol": self.id_rol,
            "activo": self.activo,
            "limit": self.pagination.limit(),
            "offset": self.pagination.offset(),
        })
    }
}

/// Removes password hashes from a result, at any depth.
pub fn strip_password_hashes(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| !HASH_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key, strip_password_hashes(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_password_hashes).collect()),
        other => other,
    }
}
