//! Administrative commands run outside the HTTP server.

use serde_json::Value;

use terra_auth::{Identity, IssuedToken, create_access_token};
use terra_config::JwtConfig;
use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::usuarios::{UsuarioPayload, strip_password_hashes};
use crate::utils::password::hash_password_blocking;
use crate::utils::stored::{self, json_param};

/// Id of the Administrador role in a freshly seeded database.
pub const DEFAULT_ADMIN_ROLE_ID: i32 = 1;

#[derive(Clone)]
pub struct NewAdmin {
    pub nombre_usuario: String,
    pub correo: String,
    pub nombre_completo: String,
    pub contrasena: String,
    pub id_rol: i32,
}

impl std::fmt::Debug for NewAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAdmin")
            .field("nombre_usuario", &self.nombre_usuario)
            .field("correo", &self.correo)
            .field("id_rol", &self.id_rol)
            .finish_non_exhaustive()
    }
}

/// Creates an administrator through `usuario_post`. There is no acting
/// user, so the actor parameter is `NULL`.
pub async fn create_admin(db: &dyn StoredFunctions, admin: NewAdmin) -> Result<Value, AppError> {
    if admin.contrasena.chars().count() < 8 {
        return Err(AppError::validation(anyhow::anyhow!(
            "La contraseña debe tener al menos 8 caracteres"
        )));
    }

    let payload = UsuarioPayload {
        nombre_usuario: Some(admin.nombre_usuario.trim().to_string()),
        correo: Some(admin.correo.trim().to_string()),
        nombre_completo: Some(admin.nombre_completo.trim().to_string()),
        contrasena_hash: Some(hash_password_blocking(admin.contrasena).await?),
        id_rol: Some(admin.id_rol),
        activo: Some(true),
    };

    let created = stored::call(db, "usuario_post", vec![json_param(&payload)?, SqlParam::Int(None)]).await?;
    Ok(strip_password_hashes(created))
}

/// Signs a token without a database round-trip, for local testing.
pub fn issue_token(identity: &Identity, jwt_config: &JwtConfig) -> Result<IssuedToken, AppError> {
    create_access_token(identity, jwt_config)
}
