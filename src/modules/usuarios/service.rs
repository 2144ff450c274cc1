use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::metrics::track_user_created;
use crate::modules::usuarios::model::{
    CambiarContrasenaDto, CreateUsuarioDto, UpdateUsuarioDto, UsuarioFilterParams,
    UsuarioPayload, strip_password_hashes,
};
use crate::utils::password::hash_password_blocking;
use crate::utils::stored::{self, json_param};

pub struct UsuarioService;

impl UsuarioService {
    #[instrument(skip(db))]
    pub async fn get_usuarios(
        db: &dyn StoredFunctions,
        filters: &UsuarioFilterParams,
    ) -> Result<Value, AppError> {
        let usuarios =
            stored::call(db, "usuario_get_all", vec![SqlParam::Json(filters.document())]).await?;
        Ok(strip_password_hashes(usuarios))
    }

    #[instrument(skip(db))]
    pub async fn get_usuario(db: &dyn StoredFunctions, id: i32) -> Result<Value, AppError> {
        let usuario =
            stored::call_one(db, "usuario_get", vec![SqlParam::int(id)], "Usuario no encontrado")
                .await?;
        Ok(strip_password_hashes(usuario))
    }

    #[instrument(skip(db))]
    pub async fn create_usuario(
        db: &dyn StoredFunctions,
        dto: CreateUsuarioDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        let id_rol = dto.id_rol;
        let payload = UsuarioPayload {
            nombre_usuario: Some(dto.nombre_usuario.trim().to_string()),
            correo: Some(dto.correo),
            nombre_completo: Some(dto.nombre_completo),
            contrasena_hash: Some(hash_password_blocking(dto.contrasena).await?),
            id_rol: Some(id_rol),
            activo: Some(dto.activo.unwrap_or(true)),
        };

        let usuario =
            stored::call(db, "usuario_post", vec![json_param(&payload)?, SqlParam::int(actor)])
                .await?;

        track_user_created(id_rol);
        Ok(strip_password_hashes(usuario))
    }

    #[instrument(skip(db))]
    pub async fn update_usuario(
        db: &dyn StoredFunctions,
        id: i32,
        dto: UpdateUsuarioDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        let contrasena_hash = match dto.contrasena {
            Some(contrasena) => Some(hash_password_blocking(contrasena).await?),
            None => None,
        };

        let payload = UsuarioPayload {
            nombre_usuario: dto.nombre_usuario.map(|n| n.trim().to_string()),
            correo: dto.correo,
            nombre_completo: dto.nombre_completo,
            contrasena_hash,
            id_rol: dto.id_rol,
            activo: dto.activo,
        };

        let usuario = stored::call(
            db,
            "usuario_put",
            vec![SqlParam::int(id), json_param(&payload)?, SqlParam::int(actor)],
        )
        .await?;
        Ok(strip_password_hashes(usuario))
    }

    #[instrument(skip(db))]
    pub async fn delete_usuario(db: &dyn StoredFunctions, id: i32, actor: i32) -> Result<Value, AppError> {
        let deleted =
            stored::call(db, "usuario_delete", vec![SqlParam::int(id), SqlParam::int(actor)])
                .await?;
        Ok(strip_password_hashes(deleted))
    }

    #[instrument(skip(db))]
    pub async fn cambiar_contrasena(
        db: &dyn StoredFunctions,
        id: i32,
        dto: CambiarContrasenaDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        let hash = hash_password_blocking(dto.contrasena_nueva).await?;

        let result = stored::call(
            db,
            "usuario_cambiar_contrasena",
            vec![SqlParam::int(id), SqlParam::text(hash), SqlParam::int(actor)],
        )
        .await?;
        Ok(strip_password_hashes(result))
    }
}
