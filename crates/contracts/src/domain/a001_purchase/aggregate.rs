use crate::domain::common::null_default::null_default;
use crate::domain::common::PaymentRecord;
use serde::{Deserialize, Serialize};

/// Remote function returning the purchase detail aggregate (bare payload, no envelope)
pub const RPC_PURCHASE_DETAIL: &str = "obtener_detalle_compra";

/// Name of the RPC parameter carrying the purchase id
pub const RPC_PURCHASE_ID_PARAM: &str = "p_compra_id";

/// Supplier embedded in the purchase aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: Option<String>,

    /// Supplier name (`nombre`)
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    /// Contact person (`contacto`)
    #[serde(rename = "contacto")]
    pub contact: Option<String>,

    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    pub email: Option<String>,
}

/// Line of the purchase "Productos" table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub sku: Option<String>,

    /// Product name (`producto_nombre`)
    #[serde(rename = "producto_nombre")]
    pub product_name: Option<String>,

    /// Quantity (`cantidad`)
    #[serde(rename = "cantidad", default, deserialize_with = "null_default")]
    pub quantity: f64,

    /// Unit price (`precio_unitario`)
    #[serde(rename = "precio_unitario", default, deserialize_with = "null_default")]
    pub unit_price: f64,

    /// Line subtotal (`subtotal`)
    #[serde(default, deserialize_with = "null_default")]
    pub subtotal: f64,
}

/// Purchase detail aggregate as returned by `obtener_detalle_compra`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDetail {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,

    /// Supplier invoice number (`numero_factura`)
    #[serde(rename = "numero_factura")]
    pub invoice_number: Option<String>,

    /// Purchase date (`fecha`)
    #[serde(rename = "fecha")]
    pub date: Option<String>,

    /// Reception status (`estado`): pendiente, recibida, parcial, cancelada
    #[serde(rename = "estado")]
    pub status: Option<String>,

    /// Payment status (`estado_pago`): pendiente, parcial, pagada, vencida
    #[serde(rename = "estado_pago")]
    pub payment_status: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub total: f64,

    /// Outstanding balance (`saldo_pendiente`)
    #[serde(rename = "saldo_pendiente", default, deserialize_with = "null_default")]
    pub balance_due: f64,

    /// Payment terms (`terminos_pago`), e.g. "30 días"
    #[serde(rename = "terminos_pago")]
    pub payment_terms: Option<String>,

    #[serde(rename = "notas")]
    pub notes: Option<String>,

    /// `None` when the supplier record was deleted
    #[serde(rename = "proveedor")]
    pub supplier: Option<SupplierRef>,

    #[serde(rename = "detalles", default, deserialize_with = "null_default")]
    pub lines: Vec<PurchaseLine>,

    #[serde(rename = "pagos", default, deserialize_with = "null_default")]
    pub payments: Vec<PaymentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let json = r#"{
            "id": "P1",
            "numero_factura": "FC-0001",
            "fecha": "2024-03-15",
            "estado": "recibida",
            "estado_pago": "parcial",
            "total": 250000,
            "saldo_pendiente": 50000,
            "terminos_pago": "30 días",
            "notas": "Entrega en bodega",
            "proveedor": {"id": "S9", "nombre": "Distribuidora Andina", "telefono": "3001234567"},
            "detalles": [
                {"sku": "A-1", "producto_nombre": "Café 500g", "cantidad": 10, "precio_unitario": 20000, "subtotal": 200000},
                {"sku": "A-2", "producto_nombre": "Azúcar 1kg", "cantidad": 5, "precio_unitario": 10000, "subtotal": 50000}
            ],
            "pagos": [
                {"fecha_pago": "2024-03-16", "metodo_pago": "transferencia", "notas": null, "monto": 200000}
            ]
        }"#;

        let detail: PurchaseDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.invoice_number.as_deref(), Some("FC-0001"));
        assert_eq!(detail.balance_due, 50000.0);
        assert_eq!(
            detail.supplier.as_ref().and_then(|s| s.name.as_deref()),
            Some("Distribuidora Andina")
        );
        assert_eq!(detail.lines.len(), 2);
        assert_eq!(detail.lines[1].product_name.as_deref(), Some("Azúcar 1kg"));
        assert_eq!(detail.payments[0].amount, 200000.0);
    }

    #[test]
    fn test_nulls_fall_back_to_defaults() {
        let json = r#"{
            "id": "P1",
            "total": null,
            "saldo_pendiente": null,
            "proveedor": null,
            "detalles": null,
            "pagos": null
        }"#;

        let detail: PurchaseDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.total, 0.0);
        assert_eq!(detail.balance_due, 0.0);
        assert!(detail.supplier.is_none());
        assert!(detail.lines.is_empty());
        assert!(detail.payments.is_empty());
    }
}
