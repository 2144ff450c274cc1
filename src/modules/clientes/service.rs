use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::clientes::model::{CreateClienteDto, ClienteFilterParams, UpdateClienteDto};
use crate::utils::stored::{self, json_param};

pub struct ClienteService;

impl ClienteService {
    #[instrument(skip(db))]
    pub async fn get_clientes(
        db: &dyn StoredFunctions,
        filters: &ClienteFilterParams,
    ) -> Result<Value, AppError> {
        stored::call(db, "cliente_get_all", vec![SqlParam::Json(filters.document())]).await
    }

    #[instrument(skip(db))]
    pub async fn get_cliente(db: &dyn StoredFunctions, id: i32) -> Result<Value, AppError> {
        stored::call_one(db, "cliente_get", vec![SqlParam::int(id)], "Cliente no encontrado").await
    }

    #[instrument(skip(db))]
    pub async fn create_cliente(
        db: &dyn StoredFunctions,
        dto: CreateClienteDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(db, "cliente_post", vec![json_param(&dto)?, SqlParam::int(actor)]).await
    }

    #[instrument(skip(db))]
    pub async fn update_cliente(
        db: &dyn StoredFunctions,
        id: i32,
        dto: UpdateClienteDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "cliente_put",
            vec![SqlParam::int(id), json_param(&dto)?, SqlParam::int(actor)],
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete_cliente(db: &dyn StoredFunctions, id: i32, actor: i32) -> Result<Value, AppError> {
        stored::call(db, "cliente_delete", vec![SqlParam::int(id), SqlParam::int(actor)]).await
    }
}
