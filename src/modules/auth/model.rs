use serde::{Deserialize, Serialize};
use validator::Validate;

use terra_auth::{Claims, Identity};

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50, message = "El nombre de usuario es obligatorio"))]
    pub nombre_usuario: String,
    #[validate(length(min = 1, max = 128, message = "La contraseña es obligatoria"))]
    pub contrasena: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("nombre_usuario", &self.nombre_usuario)
            .field("contrasena", &"[redacted]")
            .finish()
    }
}

/// Row returned by `usuario_login_get`.
#[derive(Deserialize)]
pub struct LoginRecord {
    pub id_usuario: i32,
    pub nombre_usuario: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub nombre_completo: String,
    pub contrasena_hash: String,
    pub id_rol: i32,
    pub nombre_rol: String,
    #[serde(default = "default_activo")]
    pub activo: bool,
    #[serde(default)]
    pub permisos: Vec<String>,
}

fn default_activo() -> bool {
    true
}

impl LoginRecord {
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id_usuario,
            username: self.nombre_usuario.clone(),
            email: self.correo.clone(),
            full_name: self.nombre_completo.clone(),
            role_id: self.id_rol,
            role: self.nombre_rol.clone(),
            permissions: self.permisos.clone(),
        }
    }
}

/// Public profile of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsuarioPerfil {
    pub id_usuario: String,
    pub nombre_usuario: String,
    pub correo: String,
    pub nombre_completo: String,
    pub id_rol: i32,
    pub rol: String,
    pub permisos: Vec<String>,
}

impl From<&Claims> for UsuarioPerfil {
    fn from(claims: &Claims) -> Self {
        Self {
            id_usuario: claims.sub.clone(),
            nombre_usuario: claims.username.clone(),
            correo: claims.email.clone(),
            nombre_completo: claims.full_name.clone(),
            id_rol: claims.role_id,
            rol: claims.role.clone(),
            permisos: claims.permissions.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub usuario: UsuarioPerfil,
}
