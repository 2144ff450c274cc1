use anyhow::anyhow;
use serde_json::Value;
use tracing::instrument;

use terra_auth::create_access_token;
use terra_config::JwtConfig;
use terra_core::{AppError, errors::NOT_FOUND};
use terra_db::{SqlParam, StoredFunctions};

use crate::metrics::{track_jwt_issued, track_user_login_failure, track_user_login_success};
use crate::modules::auth::model::{LoginRecord, LoginRequest, LoginResponse, UsuarioPerfil};
use crate::utils::password::verify_password_blocking;
use crate::utils::stored;

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, jwt_config))]
    pub async fn login(
        db: &dyn StoredFunctions,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let Some(record) = Self::find_login_record(db, dto.nombre_usuario.trim()).await? else {
            track_user_login_failure("unknown_user");
            return Err(AppError::invalid_credentials());
        };

        if !record.activo {
            track_user_login_failure("inactive");
            return Err(AppError::invalid_credentials());
        }

        let valid = verify_password_blocking(dto.contrasena, record.contrasena_hash.clone()).await?;
        if !valid {
            track_user_login_failure("invalid_password");
            return Err(AppError::invalid_credentials());
        }

        let issued = create_access_token(&record.identity(), jwt_config)?;

        track_jwt_issued();
        track_user_login_success(&record.nombre_rol);
        tracing::info!(user_id = record.id_usuario, role = %record.nombre_rol, "User logged in");

        Ok(LoginResponse {
            usuario: UsuarioPerfil::from(&issued.claims),
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
        })
    }

    /// `None` for unknown usernames, whether the function answers with no
    /// row, an empty list or a 404 outcome.
    async fn find_login_record(
        db: &dyn StoredFunctions,
        username: &str,
    ) -> Result<Option<LoginRecord>, AppError> {
        let data = match stored::call(db, "usuario_login_get", vec![SqlParam::text(username)]).await {
            Ok(data) => data,
            Err(err) if err.code == NOT_FOUND => return Ok(None),
            Err(err) => return Err(err),
        };

        let row = match data {
            Value::Null => None,
            Value::Array(rows) => rows.into_iter().next(),
            row => Some(row),
        };

        row.map(|row| {
            serde_json::from_value::<LoginRecord>(row)
                .map_err(|e| AppError::internal(anyhow!("Unexpected usuario_login_get row: {}", e)))
        })
        .transpose()
    }
}
