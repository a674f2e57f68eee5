use contracts::shared::public_config::PublicConfig;
use gloo_net::http::Request;
use serde_json::Value;

use super::error::RemoteError;
use super::session_storage;

/// Handle to the remote backend (PostgREST RPC endpoint)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteClient {
    url: String,
    anon_key: String,
}

impl RemoteClient {
    pub fn new(config: PublicConfig) -> Self {
        Self {
            url: config.url.trim().trim_end_matches('/').to_string(),
            anon_key: config.anon_key.trim().to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.url, function)
    }

    /// User token when signed in, anon key otherwise
    fn bearer(&self) -> String {
        session_storage::access_token(&self.url).unwrap_or_else(|| self.anon_key.clone())
    }

    /// Call a database function with named parameters
    ///
    /// An empty body or a JSON `null` result comes back as `Value::Null`.
    pub async fn rpc(&self, function: &str, params: &Value) -> Result<Value, RemoteError> {
        let url = self.rpc_url(function);
        log::debug!("rpc {} {}", function, params);

        let response = Request::post(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .header("Accept", "application/json")
            .json(params)
            .map_err(|e| RemoteError::transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| RemoteError::transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RemoteError::transport(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            let err = RemoteError::from_response(status, &text);
            log::warn!("rpc {} failed: {} {:?}", function, status, err.kind);
            return Err(err);
        }

        parse_body(&text)
    }
}

fn parse_body(text: &str) -> Result<Value, RemoteError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| {
        RemoteError::new(
            super::error::ErrorKind::Unknown,
            format!("Failed to parse response: {}", e),
        )
    })
}
