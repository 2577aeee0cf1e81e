use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use sha2::{Digest, Sha256};
use sqlx::{Row, SqlitePool};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
    types::{AuthLoginRequest, AuthSetupRequest, AuthStatusResponse},
};

/// Reports whether an admin password has been configured. Failures degrade
/// to `configured: false` so the UI can always render the setup flow.
pub async fn auth_status(State(state): State<AppState>) -> impl IntoResponse {
    let configured = password_configured(&state.db).await.unwrap_or(false);
    Json(AuthStatusResponse { configured })
}

/// Sets the admin password. Only allowed once; reconfiguration requires
/// clearing the settings row out of band.
pub async fn setup_auth(
    State(state): State<AppState>,
    Json(req): Json<AuthSetupRequest>,
) -> AppResult<impl IntoResponse> {
    if req.password.is_empty() {
        return Err(AppError::InvalidInput("password must not be empty".into()));
    }
    if password_configured(&state.db).await? {
        return Err(AppError::BadRequest("Already configured".into()));
    }

    let hashed = hash_password(&req.password);
    sqlx::query("INSERT INTO admin_settings (password_hash) VALUES (?1)")
        .bind(hashed)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({ "message": "Password set successfully" })))
}

/// Verifies the admin password. Every failure mode (unconfigured, storage
/// error, wrong password) surfaces as 401 to avoid leaking which it was.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AuthLoginRequest>,
) -> AppResult<impl IntoResponse> {
    let stored = sqlx::query("SELECT password_hash FROM admin_settings LIMIT 1")
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            tracing::warn!("Login lookup failed: {}", e);
            AppError::Unauthorized("Invalid password".into())
        })?
        .map(|r| r.get::<String, _>("password_hash"));

    match stored {
        Some(hash) if verify_password(&req.password, &hash) => Ok(Json(json!({ "success": true }))),
        _ => Err(AppError::Unauthorized("Invalid password".into())),
    }
}

async fn password_configured(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS cnt FROM admin_settings").fetch_one(pool).await?;
    Ok(row.get::<i64, _>("cnt") > 0)
}

/// Salted SHA-256, stored as `salt$hexdigest`.
pub(crate) fn hash_password(password: &str) -> String {
    let salt = uuid::Uuid::new_v4().simple().to_string();
    format!("{}${}", salt, digest(&salt, password))
}

pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };
    constant_time_eq(digest(salt, password).as_bytes(), expected.as_bytes())
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
