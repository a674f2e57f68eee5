//! `GET /api/config`: public connection settings for the dashboard
//!
//! Only the project URL and the anon key leave the server; both come
//! from the environment.

use axum::http::StatusCode;
use axum::Json;
use contracts::shared::public_config::{ConfigErrorBody, PublicConfig};
use thiserror::Error;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuración del servidor incompleta: falta {0}")]
    MissingVar(&'static str),
}

type ErrorResponse = (StatusCode, Json<ConfigErrorBody>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(ConfigErrorBody {
            error: message.into(),
        }),
    )
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Build the public settings from raw environment values
pub fn resolve_public_config(
    url: Option<String>,
    anon_key: Option<String>,
) -> Result<PublicConfig, ConfigError> {
    let url = non_blank(url).ok_or(ConfigError::MissingVar(URL_VAR))?;
    let anon_key = non_blank(anon_key).ok_or(ConfigError::MissingVar(ANON_KEY_VAR))?;
    Ok(PublicConfig { url, anon_key })
}

/// GET /api/config
pub async fn get_public_config() -> Result<Json<PublicConfig>, ErrorResponse> {
    resolve_public_config(std::env::var(URL_VAR).ok(), std::env::var(ANON_KEY_VAR).ok())
        .map(Json)
        .map_err(|e| {
            tracing::error!("{}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

/// Any other method on /api/config
pub async fn method_not_allowed() -> ErrorResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Método no permitido")
}
