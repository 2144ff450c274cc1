use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::proveedores::model::{CreateProveedorDto, ProveedorFilterParams, UpdateProveedorDto};
use crate::utils::stored::{self, json_param};

pub struct ProveedorService;

impl ProveedorService {
    #[instrument(skip(db))]
    pub async fn get_proveedores(
        db: &dyn StoredFunctions,
        filters: &ProveedorFilterParams,
    ) -> Result<Value, AppError> {
        stored::call(db, "proveedor_get_all", vec![SqlParam::Json(filters.document())]).await
    }

    #[instrument(skip(db))]
    pub async fn get_proveedor(db: &dyn StoredFunctions, id: i32) -> Result<Value, AppError> {
        stored::call_one(db, "proveedor_get", vec![SqlParam::int(id)], "Proveedor no encontrado").await
    }

    #[instrument(skip(db))]
    pub async fn create_proveedor(
        db: &dyn StoredFunctions,
        dto: CreateProveedorDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(db, "proveedor_post", vec![json_param(&dto)?, SqlParam::int(actor)]).await
    }

    #[instrument(skip(db))]
    pub async fn update_proveedor(
        db: &dyn StoredFunctions,
        id: i32,
        dto: UpdateProveedorDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "proveedor_put",
            vec![SqlParam::int(id), json_param(&dto)?, SqlParam::int(actor)],
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete_proveedor(db: &dyn StoredFunctions, id: i32, actor: i32) -> Result<Value, AppError> {
        stored::call(db, "proveedor_delete", vec![SqlParam::int(id), SqlParam::int(actor)]).await
    }
}
