use super::null_default::null_default;
use serde::{Deserialize, Serialize};

/// Payment registered against a purchase or a sale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Payment date (`fecha_pago`, ISO date or timestamp)
    #[serde(rename = "fecha_pago")]
    pub paid_at: Option<String>,

    /// Payment method (`metodo_pago`), e.g. "efectivo", "transferencia"
    #[serde(rename = "metodo_pago")]
    pub method: Option<String>,

    #[serde(rename = "notas")]
    pub notes: Option<String>,

    /// Amount paid (`monto`)
    #[serde(rename = "monto", default, deserialize_with = "null_default")]
    pub amount: f64,
}
