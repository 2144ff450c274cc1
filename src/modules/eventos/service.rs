use serde_json::Value;
use tracing::instrument;

use terra_core::AppError;
use terra_db::{SqlParam, StoredFunctions};

use crate::modules::eventos::model::EventoFilterParams;
use crate::utils::stored;

pub struct EventoService;

impl EventoService {
    #[instrument(skip(db))]
    pub async fn get_eventos(
        db: &dyn StoredFunctions,
        filters: &EventoFilterParams,
    ) -> Result<Value, AppError> {
        stored::call(db, "evento_get_all", vec![SqlParam::Json(filters.document())]).await
    }
}
