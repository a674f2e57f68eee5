use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use super::error::{LoadError, MountError};
use super::loader::{DetailBackend, MountPoint};
use crate::shared::api_utils::api_url;
use crate::system::remote::{ClientProvider, ConfigurationError};

/// Id of the work area every detail view is injected into
pub const MOUNT_CONTAINER_ID: &str = "contenido";

/// Fragments from the dashboard's own server, data through the remote client
#[derive(Clone)]
pub struct HttpDetailBackend {
    provider: ClientProvider,
}

impl HttpDetailBackend {
    pub fn new(provider: ClientProvider) -> Self {
        Self { provider }
    }
}

#[async_trait(?Send)]
impl DetailBackend for HttpDetailBackend {
    async fn fetch_markup(&self, path: &str) -> Result<String, LoadError> {
        let template_error = |reason: String| LoadError::TemplateLoad {
            path: path.to_string(),
            reason,
        };

        let response = Request::get(&api_url(path))
            .send()
            .await
            .map_err(|e| template_error(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(template_error(format!("HTTP {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| template_error(format!("Failed to read response: {}", e)))
    }

    async fn call_rpc(&self, function: &str, params: Value) -> Result<Value, LoadError> {
        let client = self.provider.client().ok_or_else(|| {
            ConfigurationError("el cliente remoto no está inicializado".to_string())
        })?;
        Ok(client.rpc(function, &params).await?)
    }
}

/// Mount point backed by an element id in the live document
pub struct ElementMount {
    id: &'static str,
}

impl ElementMount {
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }

    pub fn work_area() -> Self {
        Self::new(MOUNT_CONTAINER_ID)
    }
}

impl MountPoint for ElementMount {
    fn locate(&self) -> Result<(), MountError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(self.id))
            .map(|_| ())
            .ok_or_else(|| MountError(self.id.to_string()))
    }
}
