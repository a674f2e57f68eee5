use contracts::shared::envelope::RpcEnvelope;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::LoadError;
use super::view::DetailView;
use crate::layout::global_context::AppView;

/// How the RPC result carries the aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// The result is the aggregate itself (or `null`)
    Plain,
    /// `{exito, mensaje?, datos?}`
    Wrapped,
}

/// Interaction wired into the rendered fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    BackToList {
        button_id: &'static str,
        target: AppView,
    },
    PrintInvoice {
        button_id: &'static str,
        id: String,
    },
}

/// Description of one entity served by the generic loader
pub trait DetailEntity: 'static {
    type Aggregate: DeserializeOwned;
    type View: DetailView;

    /// Short name used in logs
    const NAME: &'static str;
    /// Path of the markup fragment
    const MARKUP_PATH: &'static str;
    const RPC_FUNCTION: &'static str;
    const ID_PARAM: &'static str;
    const ENVELOPE: EnvelopeShape;

    /// Aggregate → view-model; pure
    fn render(aggregate: Self::Aggregate) -> Self::View;

    /// Handlers attached once the view-model is bound
    fn actions(id: &str) -> Vec<DetailAction>;

    fn rpc_params(id: &str) -> Value {
        let mut params = serde_json::Map::new();
        params.insert(Self::ID_PARAM.to_string(), Value::String(id.to_string()));
        Value::Object(params)
    }
}

/// Extract the aggregate from an RPC result according to the entity's envelope
pub fn decode_payload<E: DetailEntity>(value: Value) -> Result<E::Aggregate, LoadError> {
    let payload = match E::ENVELOPE {
        EnvelopeShape::Plain => value,
        EnvelopeShape::Wrapped => {
            if value.is_null() {
                return Err(LoadError::no_data());
            }
            let envelope: RpcEnvelope<Value> =
                serde_json::from_value(value).map_err(|e| LoadError::Decode(e.to_string()))?;
            envelope.into_result().map_err(LoadError::rejected)?
        }
    };

    // Set-returning functions come back as an array
    let payload = match payload {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    };

    if payload.is_null() {
        return Err(LoadError::no_data());
    }

    serde_json::from_value(payload).map_err(|e| LoadError::Decode(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::test_entities::{PlainThing, WrappedThing};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rpc_params() {
        assert_eq!(PlainThing::rpc_params("P1"), json!({"p_id": "P1"}));
    }

    #[test]
    fn test_plain_payload() {
        let thing = decode_payload::<PlainThing>(json!({"name": "x"})).unwrap();
        assert_eq!(thing.name, "x");
        assert_eq!(
            decode_payload::<PlainThing>(Value::Null).unwrap_err(),
            LoadError::no_data()
        );
    }

    #[test]
    fn test_array_payload_takes_first_row() {
        let thing = decode_payload::<PlainThing>(json!([{"name": "a"}, {"name": "b"}])).unwrap();
        assert_eq!(thing.name, "a");
        assert_eq!(
            decode_payload::<PlainThing>(json!([])).unwrap_err(),
            LoadError::no_data()
        );
    }

    #[test]
    fn test_wrapped_payload() {
        let thing =
            decode_payload::<WrappedThing>(json!({"exito": true, "datos": {"name": "y"}})).unwrap();
        assert_eq!(thing.name, "y");

        assert_eq!(
            decode_payload::<WrappedThing>(json!({"exito": false, "mensaje": "Venta no encontrada"}))
                .unwrap_err(),
            LoadError::rejected(Some("Venta no encontrada".to_string()))
        );
        assert_eq!(
            decode_payload::<WrappedThing>(json!({"exito": false})).unwrap_err(),
            LoadError::no_data()
        );
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        assert!(matches!(
            decode_payload::<PlainThing>(json!({"other": 1})).unwrap_err(),
            LoadError::Decode(_)
        ));
    }
}
