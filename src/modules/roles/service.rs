use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::roles::model::AsignarPermisosDto;
use crate::utils::stored::{self, json_param};

pub struct RolService;

impl RolService {
    #[instrument(skip(db))]
    pub async fn get_roles(db: &dyn StoredFunctions) -> Result<Value, AppError> {
        stored::call(db, "rol_get_all", vec![]).await
    }

    /// Role with its granted permissions.
    #[instrument(skip(db))]
    pub async fn get_rol(db: &dyn StoredFunctions, id: i32) -> Result<Value, AppError> {
        stored::call_one(db, "rol_get", vec![SqlParam::int(id)], "Rol no encontrado").await
    }

    #[instrument(skip(db))]
    pub async fn get_permisos(db: &dyn StoredFunctions) -> Result<Value, AppError> {
        stored::call(db, "permiso_get_all", vec![]).await
    }

    #[instrument(skip(db))]
    pub async fn asignar_permisos(
        db: &dyn StoredFunctions,
        id: i32,
        dto: AsignarPermisosDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "rol_permisos_put",
            vec![SqlParam::int(id), json_param(&dto.permisos)?, SqlParam::int(actor)],
        )
        .await
    }
}
