use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use terra_auth::{Claims, verify_token};
use terra_core::{AppError, roles};

use crate::metrics::track_jwt_validation;
use crate::state::AppState;

/// The authenticated caller, decoded from a verified access token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.0.has_permission(permission)
    }

    pub fn role(&self) -> &str {
        &self.0.role
    }

    pub fn is_admin(&self) -> bool {
        roles::is_admin(&self.0.role)
    }

    pub fn has_any_role(&self, allowed: &[String]) -> bool {
        allowed
            .iter()
            .any(|role| roles::role_matches(&self.0.role, role))
    }

    pub fn user_id(&self) -> Result<i32, AppError> {
        self.0
            .user_id()
            .ok_or_else(|| AppError::invalid_token("Token inválido"))
    }

    /// Owner filter for scoped listings: `None` for roles that see every
    /// record, the caller's own id otherwise.
    pub fn scope(&self) -> Result<Option<i32>, AppError> {
        if roles::sees_all_records(&self.0.role) {
            Ok(None)
        } else {
            self.user_id().map(Some)
        }
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthenticated("Token no proporcionado"))?
        .to_str()
        .map_err(|_| AppError::unauthenticated("Cabecera de autorización inválida"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthenticated("Formato de token inválido"))?
        .trim();

    if token.is_empty() {
        return Err(AppError::unauthenticated("Token no proporcionado"));
    }

    Ok(token)
}

/// Verifies the bearer token and stores the [`AuthUser`] for later stages.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?;

    let claims = verify_token(token, &state.jwt_config).inspect_err(|err| {
        track_jwt_validation(false);
        tracing::debug!(reason = %err.error, "Rejected access token");
    })?;
    track_jwt_validation(true);

    req.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthenticated("Usuario no autenticado"))
    }
}
