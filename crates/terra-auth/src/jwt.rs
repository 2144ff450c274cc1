//! Token creation and verification.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use terra_config::JwtConfig;
use terra_core::AppError;

use crate::claims::{Claims, Identity};

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    pub claims: Claims,
}

/// Signs an access token for `identity` valid for `jwt_config.lifetime()` seconds.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    identity: &Identity,
    jwt_config: &JwtConfig,
) -> Result<IssuedToken, AppError> {
    let lifetime = jwt_config.lifetime();
    let now = Utc::now().timestamp() as usize;
    let exp = now.saturating_add(lifetime as usize);
    let claims = Claims::new(identity, now, exp);

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))?;

    Ok(IssuedToken {
        token,
        expires_in: lifetime,
        claims,
    })
}

/// Verifies signature and expiry and returns the decoded claims.
///
/// # Errors
///
/// Returns `INVALID_TOKEN` if the signature does not match the configured
/// secret, the token has expired, the payload misses a claim, or the subject
/// is not a numeric user id.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::invalid_token("Token expirado"),
        _ => AppError::invalid_token("Token inválido"),
    })?;

    if claims.user_id().is_none() {
        return Err(AppError::invalid_token("Token inválido"));
    }

    Ok(claims)
}
