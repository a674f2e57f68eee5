//! Element ids of `/views/ventas-detalle.html`

pub const CODE: &str = "venta-codigo";
pub const DATE: &str = "venta-fecha";
pub const STATUS: &str = "venta-estado";
pub const PAYMENT_STATUS: &str = "venta-estado-pago";
pub const SHIPPING_TYPE: &str = "venta-tipo-envio";
pub const OBSERVATIONS: &str = "venta-observaciones";
pub const RESPONSIBLE: &str = "venta-responsable";

pub const CLIENT_NAME: &str = "venta-cliente-nombre";
pub const CLIENT_DOCUMENT: &str = "venta-cliente-documento";
pub const CLIENT_PHONE: &str = "venta-cliente-telefono";
pub const CLIENT_EMAIL: &str = "venta-cliente-email";

pub const ADDRESS: &str = "venta-direccion";
pub const CITY: &str = "venta-ciudad";
pub const ADDRESS_REFERENCE: &str = "venta-referencia";

pub const SUBTOTAL: &str = "venta-subtotal";
pub const DISCOUNTS: &str = "venta-descuentos";
pub const TAXES: &str = "venta-impuestos";
pub const SHIPPING_COST: &str = "venta-costo-envio";
pub const TOTAL: &str = "venta-total";
pub const TOTAL_PAID: &str = "venta-total-pagado";
pub const BALANCE_DUE: &str = "venta-saldo-pendiente";

pub const LINES_QUANTITY: &str = "venta-cantidad-total";
pub const LINES_SUBTOTAL: &str = "venta-subtotal-calculado";
pub const LINES_DISCOUNT: &str = "venta-total-descuento-lineas";
pub const LINES_TAX: &str = "venta-total-impuesto-lineas";
pub const LINES_TOTAL: &str = "venta-total-lineas";

pub const LINES_BODY: &str = "venta-productos-body";
pub const PAYMENTS_BODY: &str = "venta-pagos-body";

pub const BACK_BUTTON: &str = "btn-volver-ventas";
pub const PRINT_BUTTON: &str = "btn-imprimir-factura";
