//! Per-route authorization gates.
//!
//! A gate is a value built when the route is registered and attached with
//! `route_layer`. It reads the [`AuthUser`] placed in the request extensions
//! by [`authenticate`](super::auth::authenticate) and either lets the request
//! through or answers with the error envelope.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use terra_core::AppError;

use crate::metrics::track_authorization_check;
use crate::middleware::auth::AuthUser;

pub trait Gate: Send + Sync + 'static {
    fn check(&self, user: Option<&AuthUser>) -> Result<(), AppError>;
}

/// Admits administrators and callers holding `permission`.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    permission: &'static str,
}

impl PermissionGate {
    pub fn new(permission: &'static str) -> Self {
        Self { permission }
    }
}

impl Gate for PermissionGate {
    fn check(&self, user: Option<&AuthUser>) -> Result<(), AppError> {
        let user = user.ok_or_else(|| AppError::unauthenticated("Usuario no autenticado"))?;

        let allowed = user.is_admin() || user.has_permission(self.permission);
        track_authorization_check("permission", allowed, user.role());

        if !allowed {
            tracing::debug!(
                user = %user.0.sub,
                role = %user.role(),
                permission = self.permission,
                "Permission denied"
            );
            return Err(AppError::forbidden(format!(
                "No tiene permiso para realizar esta acción ({})",
                self.permission
            )));
        }

        Ok(())
    }
}

/// Admits callers whose role matches one entry of the allow-list,
/// case-insensitively. An empty list admits nobody.
#[derive(Debug, Clone)]
pub struct RoleGate {
    roles: Vec<String>,
}

impl RoleGate {
    pub fn new(roles: &[&str]) -> Self {
        Self {
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Gate for RoleGate {
    fn check(&self, user: Option<&AuthUser>) -> Result<(), AppError> {
        let user = user.ok_or_else(|| AppError::unauthenticated("Usuario no autenticado"))?;

        let allowed = user.has_any_role(&self.roles);
        track_authorization_check("role", allowed, user.role());

        if !allowed {
            return Err(AppError::forbidden(format!(
                "Acceso restringido a los roles: {}",
                self.roles.join(", ")
            )));
        }

        Ok(())
    }
}

pub struct GateLayer<G> {
    gate: Arc<G>,
}

impl<G> GateLayer<G> {
    pub fn new(gate: G) -> Self {
        Self {
            gate: Arc::new(gate),
        }
    }
}

impl<G> Clone for GateLayer<G> {
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<S, G> Layer<S> for GateLayer<G> {
    type Service = GateService<S, G>;

    fn layer(&self, inner: S) -> Self::Service {
        GateService {
            inner,
            gate: Arc::clone(&self.gate),
        }
    }
}

pub struct GateService<S, G> {
    inner: S,
    gate: Arc<G>,
}

impl<S: Clone, G> Clone for GateService<S, G> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<S, G> Service<Request> for GateService<S, G>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    G: Gate,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        if let Err(err) = self.gate.check(req.extensions().get::<AuthUser>()) {
            return Box::pin(async move { Ok(err.into_response()) });
        }

        // Use the service that was driven to readiness.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(req).await })
    }
}

/// Gate requiring `permission` (administrators always pass).
pub fn require_permission(permission: &'static str) -> GateLayer<PermissionGate> {
    GateLayer::new(PermissionGate::new(permission))
}

/// Gate restricted to the listed roles.
pub fn require_roles(roles: &[&str]) -> GateLayer<RoleGate> {
    GateLayer::new(RoleGate::new(roles))
}
