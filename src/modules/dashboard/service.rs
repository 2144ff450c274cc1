use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::dashboard::model::PeriodoParams;
use crate::utils::stored;

pub struct DashboardService;

impl DashboardService {
    /// Totals per entity and pending verifications, within `scope`.
    #[instrument(skip(db))]
    pub async fn get_resumen(db: &dyn StoredFunctions, scope: Option<i32>) -> Result<Value, AppError> {
        stored::call(db, "dashboard_get_resumen", vec![SqlParam::opt_int(scope)]).await
    }

    /// Payment amounts grouped by day and currency.
    #[instrument(skip(db))]
    pub async fn get_pagos(
        db: &dyn StoredFunctions,
        periodo: &PeriodoParams,
        scope: Option<i32>,
    ) -> Result<Value, AppError> {
        stored::call(
            db,
            "dashboard_get_pagos",
            vec![
                SqlParam::opt_date(periodo.desde),
                SqlParam::opt_date(periodo.hasta),
                SqlParam::opt_int(scope),
            ],
        )
        .await
    }
}
