#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use terra_canada::router::init_router;
use terra_canada::state::AppState;
use terra_canada::terra_auth::{Identity, create_access_token};
use terra_canada::terra_config::{CorsConfig, JwtConfig, WebhookConfig};
use terra_canada::terra_db::{DbError, SqlParam, StoredFunctions};

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";
pub const TEST_USER_ID: i32 = 7;

/// In-memory stand-in for the database: answers each function with a canned
/// document and records every call.
#[derive(Default)]
pub struct FakeDb {
    responses: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<(String, Vec<SqlParam>)>>,
}

impl FakeDb {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Sets the result of `function`. Functions without one return `NULL`.
    pub fn respond(&self, function: &str, result: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(function.to_string(), result);
    }

    pub fn calls(&self) -> Vec<(String, Vec<SqlParam>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn params_of(&self, function: &str) -> Option<Vec<SqlParam>> {
        self.calls()
            .into_iter()
            .find(|(name, _)| name == function)
            .map(|(_, params)| params)
    }
}

#[async_trait]
impl StoredFunctions for FakeDb {
    async fn call(&self, function: &str, params: Vec<SqlParam>) -> Result<Value, DbError> {
        self.calls
            .lock()
            .unwrap()
            .push((function.to_string(), params));

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(function)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiry: 3600,
    }
}

pub fn test_state(db: Arc<FakeDb>, webhook: WebhookConfig) -> AppState {
    AppState::new(
        db,
        jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        webhook,
    )
    .unwrap()
}

pub fn setup_test_app(db: Arc<FakeDb>) -> Router {
    init_router(test_state(db, WebhookConfig::default()))
}

pub fn identity(role: &str, permissions: &[&str]) -> Identity {
    Identity {
        user_id: TEST_USER_ID,
        username: "mlopez".to_string(),
        email: "mlopez@terracanada.com".to_string(),
        full_name: "María López".to_string(),
        role_id: 3,
        role: role.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn token_for(role: &str, permissions: &[&str]) -> String {
    create_access_token(&identity(role, permissions), &jwt_config())
        .unwrap()
        .token
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
