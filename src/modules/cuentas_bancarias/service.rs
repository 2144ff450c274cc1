use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::cuentas_bancarias::model::{CreateCuentaBancariaDto, CuentaBancariaFilterParams, UpdateCuentaBancariaDto};
use crate::utils::stored::{self, json_param};

pub struct CuentaBancariaService;

impl CuentaBancariaService {
    #[instrument(skip(db))]
    pub async fn get_cuentas_bancarias(
        db: &dyn StoredFunctions,
        filters: &CuentaBancariaFilterParams,
    ) -> Result<Value, AppError> {
        stored::call(db, "cuenta_bancaria_get_all", vec![SqlParam::Json(filters.document())]).await
    }

    #[instrument(skip(db))]
    pub async fn get_cuenta_bancaria(db: &dyn StoredFunctions, id: i32) -> Result<Value, AppError> {
        stored::call_one(db, "cuenta_bancaria_get", vec![SqlParam::int(id)], "Cuenta bancaria no encontrada").await
    }

    #[instrument(skip(db))]
    pub async fn create_cuenta_bancaria(
        db: &dyn StoredFunctions,
        dto: CreateCuentaBancariaDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(db, "cuenta_bancaria_post", vec![json_param(&dto)?, SqlParam::int(actor)]).await
    }

    #[instrument(skip(db))]
    pub async fn update_cuenta_bancaria(
        db: &dyn StoredFunctions,
        id: i32,
        dto: UpdateCuentaBancariaDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "cuenta_bancaria_put",
            vec![SqlParam::int(id), json_param(&dto)?, SqlParam::int(actor)],
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete_cuenta_bancaria(db: &dyn StoredFunctions, id: i32, actor: i32) -> Result<Value, AppError> {
        stored::call(db, "cuenta_bancaria_delete", vec![SqlParam::int(id), SqlParam::int(actor)]).await
    }
}
