use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::pagos::model::{CreatePagoDto, PagoFilterParams, UpdatePagoDto, VerificarPagoDto};
use crate::utils::stored::{self, json_param};

pub struct PagoService;

impl PagoService {
    /// `scope` limits the listing to payments registered by that user.
    #[instrument(skip(db))]
    pub async fn get_pagos(
        db: &dyn StoredFunctions,
        filters: &PagoFilterParams,
        scope: Option<i32>,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "pago_get_all",
            vec![SqlParam::Json(filters.document()), SqlParam::opt_int(scope)],
        )
        .await
    }

    /// A payment outside the caller's scope is reported as not found.
    #[instrument(skip(db))]
    pub async fn get_pago(
        db: &dyn StoredFunctions,
        id: i32,
        scope: Option<i32>,
    ) -> Result<Value, AppError> {
        stored::call_one(
            db,
            "pago_get",
            vec![SqlParam::int(id), SqlParam::opt_int(scope)],
            "Pago no encontrado",
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn create_pago(
        db: &dyn StoredFunctions,
        dto: CreatePagoDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(db, "pago_post", vec![json_param(&dto)?, SqlParam::int(actor)]).await
    }

    #[instrument(skip(db))]
    pub async fn update_pago(
        db: &dyn StoredFunctions,
        id: i32,
        dto: UpdatePagoDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "pago_put",
            vec![SqlParam::int(id), json_param(&dto)?, SqlParam::int(actor)],
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete_pago(db: &dyn StoredFunctions, id: i32, actor: i32) -> Result<Value, AppError> {
        stored::call(db, "pago_delete", vec![SqlParam::int(id), SqlParam::int(actor)]).await
    }

    #[instrument(skip(db))]
    pub async fn verificar_pago(
        db: &dyn StoredFunctions,
        id: i32,
        dto: VerificarPagoDto,
        actor: i32,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "pago_verificar",
            vec![
                SqlParam::int(id),
                SqlParam::bool(dto.verificado),
                SqlParam::Text(dto.observacion),
                SqlParam::int(actor),
            ],
        )
        .await
    }
}
