use crate::domain::common::null_default::null_default;
use crate::domain::common::PaymentRecord;
use serde::{Deserialize, Serialize};

/// Remote function returning the sale detail aggregate wrapped in an [`RpcEnvelope`]
///
/// [`RpcEnvelope`]: crate::shared::envelope::RpcEnvelope
pub const RPC_SALE_DETAIL: &str = "obtener_detalle_venta";

/// Name of the RPC parameter carrying the sale id
pub const RPC_SALE_ID_PARAM: &str = "p_venta_id";

/// Shipping category meaning the customer picks the order up
pub const SHIPPING_PICKUP: &str = "Recogen";

/// Client embedded in the sale aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: Option<String>,

    #[serde(rename = "nombre")]
    pub name: Option<String>,

    /// Identity document / tax id (`documento`)
    #[serde(rename = "documento")]
    pub document: Option<String>,

    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    pub email: Option<String>,
}

/// Delivery address (`direccion_entrega`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(rename = "direccion")]
    pub street: Option<String>,

    #[serde(rename = "ciudad")]
    pub city: Option<String>,

    /// Free-text landmark (`referencia`)
    #[serde(rename = "referencia")]
    pub reference: Option<String>,
}

/// User responsible for the sale (`usuario_responsable`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsibleUser {
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    pub email: Option<String>,
}

/// Line of the sale "Productos" table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub sku: Option<String>,

    #[serde(rename = "producto_nombre")]
    pub product_name: Option<String>,

    #[serde(rename = "cantidad", default, deserialize_with = "null_default")]
    pub quantity: f64,

    #[serde(rename = "precio_unitario", default, deserialize_with = "null_default")]
    pub unit_price: f64,

    #[serde(default, deserialize_with = "null_default")]
    pub subtotal: f64,

    /// Discount percentage (`descuento_porcentaje`)
    #[serde(rename = "descuento_porcentaje", default, deserialize_with = "null_default")]
    pub discount_percent: f64,

    /// Tax percentage (`impuesto_porcentaje`)
    #[serde(rename = "impuesto_porcentaje", default, deserialize_with = "null_default")]
    pub tax_percent: f64,

    #[serde(rename = "descuento_monto", default, deserialize_with = "null_default")]
    pub discount_amount: f64,

    #[serde(rename = "impuesto_monto", default, deserialize_with = "null_default")]
    pub tax_amount: f64,

    /// Line total after discount and tax (`total_linea`)
    #[serde(rename = "total_linea", default, deserialize_with = "null_default")]
    pub line_total: f64,
}

/// Sale detail aggregate, the `datos` of `obtener_detalle_venta`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleDetail {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,

    /// Sale code (`codigo`), e.g. "V-000123"
    #[serde(rename = "codigo")]
    pub code: Option<String>,

    #[serde(rename = "fecha")]
    pub date: Option<String>,

    /// Order status (`estado`)
    #[serde(rename = "estado")]
    pub status: Option<String>,

    /// Payment status (`estado_pago`)
    #[serde(rename = "estado_pago")]
    pub payment_status: Option<String>,

    /// Gross total (`total`)
    #[serde(default, deserialize_with = "null_default")]
    pub total: f64,

    #[serde(default, deserialize_with = "null_default")]
    pub subtotal: f64,

    #[serde(rename = "impuestos", default, deserialize_with = "null_default")]
    pub taxes: f64,

    #[serde(rename = "descuentos", default, deserialize_with = "null_default")]
    pub discounts: f64,

    #[serde(rename = "costo_envio", default, deserialize_with = "null_default")]
    pub shipping_cost: f64,

    #[serde(rename = "saldo_pendiente", default, deserialize_with = "null_default")]
    pub balance_due: f64,

    /// Shipping category (`tipo_envio`); see [`SHIPPING_PICKUP`]
    #[serde(rename = "tipo_envio")]
    pub shipping_type: Option<String>,

    #[serde(rename = "observaciones")]
    pub observations: Option<String>,

    /// `None` for a counter sale
    #[serde(rename = "cliente")]
    pub client: Option<ClientRef>,

    #[serde(rename = "direccion_entrega")]
    pub delivery_address: Option<DeliveryAddress>,

    #[serde(rename = "usuario_responsable")]
    pub responsible_user: Option<ResponsibleUser>,

    #[serde(rename = "detalles", default, deserialize_with = "null_default")]
    pub lines: Vec<SaleLine>,

    #[serde(rename = "pagos", default, deserialize_with = "null_default")]
    pub payments: Vec<PaymentRecord>,
}

impl SaleDetail {
    pub fn is_pickup(&self) -> bool {
        self.shipping_type.as_deref().map(str::trim) == Some(SHIPPING_PICKUP)
    }
}
