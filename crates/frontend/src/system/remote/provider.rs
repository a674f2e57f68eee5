//! Remote client provider
//!
//! Created once by the application shell and handed to the views through
//! Leptos context. `initialize` fetches the public connection settings from
//! the dashboard's own server on first use; afterwards the cached client is
//! returned.

use std::sync::Arc;

use contracts::shared::public_config::{PublicConfig, CONFIG_ENDPOINT};
use gloo_net::http::Request;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use super::client::RemoteClient;
use crate::shared::api_utils::api_url;

/// Connection settings could not be obtained; no backend access is possible
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error de configuración: {0}")]
pub struct ConfigurationError(pub String);

/// Config payload before validation; both values may be missing
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    url: Option<String>,
    #[serde(rename = "anonKey")]
    anon_key: Option<String>,
}

fn validate(raw: RawConfig) -> Result<PublicConfig, ConfigurationError> {
    let url = raw.url.filter(|v| !v.trim().is_empty());
    let anon_key = raw.anon_key.filter(|v| !v.trim().is_empty());
    match (url, anon_key) {
        (Some(url), Some(anon_key)) => Ok(PublicConfig { url, anon_key }),
        (None, _) => Err(ConfigurationError("falta la URL del servidor".to_string())),
        (_, None) => Err(ConfigurationError("falta la clave pública".to_string())),
    }
}

async fn fetch_public_config() -> Result<PublicConfig, ConfigurationError> {
    let response = Request::get(&api_url(CONFIG_ENDPOINT))
        .send()
        .await
        .map_err(|e| ConfigurationError(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ConfigurationError(format!(
            "{} respondió HTTP {}",
            CONFIG_ENDPOINT,
            response.status()
        )));
    }

    let raw = response
        .json::<RawConfig>()
        .await
        .map_err(|e| ConfigurationError(format!("Failed to parse response: {}", e)))?;

    validate(raw)
}

#[derive(Clone, Default)]
pub struct ClientProvider {
    client: Arc<OnceCell<RemoteClient>>,
}

impl ClientProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider already holding a client, for tests and embedding
    pub fn with_client(client: RemoteClient) -> Self {
        let provider = Self::new();
        let _ = provider.client.set(client);
        provider
    }

    /// Fetch the configuration on first call and cache the client
    pub async fn initialize(&self) -> Result<RemoteClient, ConfigurationError> {
        if let Some(client) = self.client.get() {
            return Ok(client.clone());
        }

        let config = fetch_public_config().await.map_err(|e| {
            log::error!("{}", e);
            e
        })?;
        log::info!("remote client initialized for {}", config.url);

        // A concurrent initialize may have won the race; keep the first client.
        let client = self.client.get_or_init(|| RemoteClient::new(config));
        Ok(client.clone())
    }

    /// Cached client; `None` (with a warning) before `initialize` succeeded
    pub fn client(&self) -> Option<RemoteClient> {
        let client = self.client.get().cloned();
        if client.is_none() {
            log::warn!("remote client requested before initialization");
        }
        client
    }

    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_config() {
        let cfg = validate(RawConfig {
            url: Some("https://abcd.supabase.co".to_string()),
            anon_key: Some("key".to_string()),
        })
        .unwrap();
        assert_eq!(cfg.anon_key, "key");
    }

    #[test]
    fn test_validate_missing_values() {
        let err = validate(RawConfig {
            url: None,
            anon_key: Some("key".to_string()),
        })
        .unwrap_err();
        assert!(err.0.contains("URL"));

        assert!(validate(RawConfig {
            url: Some("https://abcd.supabase.co".to_string()),
            anon_key: Some("  ".to_string()),
        })
        .is_err());
    }

    #[test]
    fn test_client_before_initialize_is_none() {
        let provider = ClientProvider::new();
        assert!(provider.client().is_none());
        assert!(!provider.is_initialized());
    }

    #[test]
    fn test_initialize_returns_cached_client() {
        let client = RemoteClient::new(PublicConfig {
            url: "https://abcd.supabase.co".to_string(),
            anon_key: "key".to_string(),
        });
        let provider = ClientProvider::with_client(client.clone());
        let cloned = provider.clone();

        let initialized = futures::executor::block_on(cloned.initialize()).unwrap();
        assert_eq!(initialized, client);
        assert_eq!(provider.client(), Some(client));
        assert!(provider.is_initialized());
    }
}
