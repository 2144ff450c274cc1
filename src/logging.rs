//! Request logging and tracing subscriber setup.
//!
//! Logs go to the console, a daily error file and a daily JSON file under
//! `storage/logs`. Traces are exported over OTLP when a collector answers.

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use std::time::Instant;
use tracing::{Instrument, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const LOG_DIR: &str = "storage/logs";

/// Longest client-supplied request id that is reused as is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuses the caller's `x-request-id` when it is printable and short,
/// otherwise generates a fresh UUID.
pub fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Runs the request inside a `request` span carrying its id and route, so
/// gate decisions and stored-function logs can be correlated. The id is
/// echoed back on the response.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = resolve_request_id(req.headers());
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = info_span!("request", request_id = %request_id, method = %method, route = %route);

    let mut response = async move {
        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        match status {
            500..=599 => error!(status, latency_ms, "Server error"),
            401 | 403 => warn!(status, latency_ms, "Request denied"),
            400..=499 => warn!(status, latency_ms, "Client error"),
            _ => info!(status, latency_ms, "Request completed"),
        }
        response
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// `OTEL_TRACES_SAMPLER_RATIO` in `0.0..=1.0`; anything else samples every trace.
fn sampler_from_env() -> Sampler {
    match std::env::var("OTEL_TRACES_SAMPLER_RATIO")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
    {
        Some(ratio) if (0.0..1.0).contains(&ratio) => Sampler::ParentBased(Box::new(
            Sampler::TraceIdRatioBased(ratio),
        )),
        _ => Sampler::AlwaysOn,
    }
}

fn init_tracer() -> Result<Tracer, TraceError> {
    let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());

    info!(endpoint = %otlp_endpoint, "Exporting traces over OTLP");

    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, "terra-canada-api"),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new(
            "deployment.environment",
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        ),
    ]);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(otlp_endpoint),
        )
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(sampler_from_env())
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

/// Console, rolling files and (when reachable) OTLP export.
///
/// Must be called from within the Tokio runtime.
pub fn init_tracing() -> std::io::Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    std::fs::create_dir_all(LOG_DIR)?;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,terra_db=info,tower_http=warn,hyper=info,tonic=info",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    // Errors only, plain text
    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "terra-canada.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    let json_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "terra-canada.json");
    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    match init_tracer() {
        Ok(tracer) => {
            let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .with(json_layer)
                .with(otel_layer)
                .init();

            info!("Tracing initialized (console, files, OTLP)");
        }
        Err(e) => {
            eprintln!("OTLP export unavailable ({e}); logging to console and files only");

            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .with(json_layer)
                .init();

            warn!("Tracing initialized without OTLP export");
        }
    }

    Ok(())
}

/// Flushes pending spans before exit.
pub async fn shutdown_tracer() {
    info!("Flushing traces");
    global::shutdown_tracer_provider();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(request_id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(request_id).unwrap());
        headers
    }

    #[test]
    fn test_request_id_is_reused() {
        assert_eq!(resolve_request_id(&headers("req-123")), "req-123");
        assert_eq!(resolve_request_id(&headers("  req-9  ")), "req-9");
    }

    #[test]
    fn test_request_id_is_generated() {
        let long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        for id in [resolve_request_id(&HeaderMap::new()), resolve_request_id(&headers(&long))] {
            assert!(uuid::Uuid::parse_str(&id).is_ok(), "{id}");
        }
        assert_ne!(
            resolve_request_id(&HeaderMap::new()),
            resolve_request_id(&HeaderMap::new())
        );
    }
}
