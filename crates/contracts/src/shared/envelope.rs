use serde::{Deserialize, Serialize};

/// Response wrapper used by RPC functions that report their own outcome
///
/// `{"exito": true, "datos": {...}}` or `{"exito": false, "mensaje": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcEnvelope<T> {
    /// Success flag (`exito`)
    #[serde(rename = "exito", default)]
    pub success: bool,

    /// Server-supplied message (`mensaje`), usually set on failure
    #[serde(rename = "mensaje", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payload (`datos`)
    #[serde(rename = "datos", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> RpcEnvelope<T> {
    /// Payload of a successful envelope, or the server message otherwise
    pub fn into_result(self) -> Result<T, Option<String>> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_with_data() {
        let env: RpcEnvelope<Value> =
            serde_json::from_str(r#"{"exito": true, "datos": {"id": "S1"}}"#).unwrap();
        assert_eq!(env.into_result().unwrap()["id"], "S1");
    }

    #[test]
    fn test_failure_keeps_message() {
        let env: RpcEnvelope<Value> =
            serde_json::from_str(r#"{"exito": false, "mensaje": "Venta no encontrada"}"#).unwrap();
        assert_eq!(
            env.into_result().unwrap_err().as_deref(),
            Some("Venta no encontrada")
        );
    }

    #[test]
    fn test_success_without_data_is_failure() {
        let env: RpcEnvelope<Value> = serde_json::from_str(r#"{"exito": true}"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), None);
    }
}
