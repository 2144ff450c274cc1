use std::sync::Arc;

use terra_config::{CorsConfig, DatabaseConfig, JwtConfig, WebhookConfig};
use terra_db::{PgStoredFunctions, StoredFunctions, init_db_pool};

use crate::utils::webhook::WebhookClient;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn StoredFunctions>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub webhook: WebhookClient,
}

impl AppState {
    pub fn new(
        db: Arc<dyn StoredFunctions>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        webhook_config: WebhookConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            db,
            jwt_config,
            cors_config,
            webhook: WebhookClient::new(webhook_config)?,
        })
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = init_db_pool(&database_config).await?;

    AppState::new(
        Arc::new(PgStoredFunctions::new(pool)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        WebhookConfig::from_env(),
    )
}
