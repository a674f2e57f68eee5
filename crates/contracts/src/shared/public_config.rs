use serde::{Deserialize, Serialize};

/// Path of the configuration endpoint served by the backend
pub const CONFIG_ENDPOINT: &str = "/api/config";

/// Public connection settings for the remote backend
///
/// Only the anon key ever leaves the server; it is meant to be public and
/// row-level security does the actual access control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub url: String,

    #[serde(rename = "anonKey")]
    pub anon_key: String,
}

/// Error body returned by the configuration endpoint (405 / 500)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigErrorBody {
    pub error: String,
}
