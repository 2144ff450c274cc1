//! Access-token claim set.

use serde::{Deserialize, Serialize};

/// The user a token is issued for, as loaded at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role_id: i32,
    pub role: String,
    pub permissions: Vec<String>,
}

/// JWT claims for access tokens.
///
/// Every field is required: a payload missing any of them fails to decode
/// and the token is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role_id: i32,
    /// Role name, e.g. "Administrador"
    pub role: String,
    /// Permission names granted through the role, e.g. "pagos.crear"
    pub permissions: Vec<String>,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn new(identity: &Identity, issued_at: usize, expires_at: usize) -> Self {
        Self {
            sub: identity.user_id.to_string(),
            username: identity.username.clone(),
            email: identity.email.clone(),
            full_name: identity.full_name.clone(),
            role_id: identity.role_id,
            role: identity.role.clone(),
            permissions: identity.permissions.clone(),
            exp: expires_at,
            iat: issued_at,
        }
    }

    /// Numeric user id carried in `sub`.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            user_id: 7,
            username: "mlopez".to_string(),
            email: "mlopez@terracanada.com".to_string(),
            full_name: "María López".to_string(),
            role_id: 3,
            role: "Equipo".to_string(),
            permissions: vec!["pagos.leer".to_string()],
        }
    }

    #[test]
    fn test_claims_from_identity() {
        let claims = Claims::new(&identity(), 100, 200);
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.role, "Equipo");
        assert_eq!(claims.exp, 200);
        assert_eq!(claims.iat, 100);
    }

    #[test]
    fn test_has_permission_is_exact() {
        let claims = Claims::new(&identity(), 0, 1);
        assert!(claims.has_permission("pagos.leer"));
        assert!(!claims.has_permission("pagos.crear"));
        assert!(!claims.has_permission("PAGOS.LEER"));
    }

    #[test]
    fn test_deserialize_rejects_missing_role() {
        let json = r#"{"sub":"1","username":"a","email":"a@b.c","full_name":"A","role_id":1,"permissions":[],"exp":1,"iat":0}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_non_numeric_subject() {
        let mut claims = Claims::new(&identity(), 0, 1);
        claims.sub = "abc".to_string();
        assert_eq!(claims.user_id(), None);
    }
}
