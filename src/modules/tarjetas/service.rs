use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::tarjetas::model::{
    CargoDto, CreateTarjetaDto, RecargaDto, TarjetaFilterParams, UpdateTarjetaDto,
};
use crate::utils::stored::{self, json_param};

pub struct TarjetaService;

impl TarjetaService {
    #[instrument(skip(db))]
    pub async fn get_tarjetas(
        db: &dyn StoredFunctions,
        filters: &TarjetaFilterParams,
    ) -> Result<Value, AppError> {
        stored::call(db, "tarjeta_get_all", vec![SqlParam::Json(filters.document())]).await
    }

    #[instrument(skip(db))]
    pub async fn get_tarjeta(db: &dyn StoredFunctions, id: i32) -> Result<Value, AppError> {
        stored::call_one(db, "tarjeta_get", vec![SqlParam::int(id)], "Tarjeta no encontrada").await
    }

    #[instrument(skip(db))]
    pub async fn create_tarjeta(
        db: &dyn StoredFunctions,
        dto: CreateTarjetaDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(db, "tarjeta_post", vec![json_param(&dto)?, SqlParam::int(actor)]).await
    }

    #[instrument(skip(db))]
    pub async fn update_tarjeta(
        db: &dyn StoredFunctions,
        id: i32,
        dto: UpdateTarjetaDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "tarjeta_put",
            vec![SqlParam::int(id), json_param(&dto)?, SqlParam::int(actor)],
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete_tarjeta(db: &dyn StoredFunctions, id: i32, actor: i32) -> Result<Value, AppError> {
        stored::call(db, "tarjeta_delete", vec![SqlParam::int(id), SqlParam::int(actor)]).await
    }

    /// Charges `monto` against the card balance; the database rejects
    /// charges above the available balance.
    #[instrument(skip(db))]
    pub async fn realizar_cargo(
        db: &dyn StoredFunctions,
        id: i32,
        dto: CargoDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "tarjeta_realizar_cargo",
            vec![
                SqlParam::int(id),
                SqlParam::numeric(dto.monto),
                SqlParam::Text(dto.descripcion),
                SqlParam::int(actor),
            ],
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn recargar(
        db: &dyn StoredFunctions,
        id: i32,
        dto: RecargaDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "tarjeta_recargar",
            vec![
                SqlParam::int(id),
                SqlParam::numeric(dto.monto),
                SqlParam::Text(dto.descripcion),
                SqlParam::int(actor),
            ],
        )
        .await
    }
}
