use dotenvy::dotenv;
use tracing::{info, warn};

use terra_canada::logging::{init_tracing, shutdown_tracer};
use terra_canada::metrics::{init_metrics, metrics_app};
use terra_canada::router::init_router;
use terra_canada::state::init_app_state;
use terra_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;
    let metrics_handle = init_metrics()?;

    let state = init_app_state().await?;
    if state.jwt_config.uses_default_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with the built-in placeholder secret");
    }
    if !state.webhook.is_configured() {
        warn!("WEBHOOK_EMAIL_URL is not set; summary notifications are disabled");
    }

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let address = ServerConfig::from_env().bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
