//! Element ids of `/views/compras-detalle.html`

pub const INVOICE_NUMBER: &str = "compra-numero-factura";
pub const DATE: &str = "compra-fecha";
pub const STATUS: &str = "compra-estado";
pub const PAYMENT_STATUS: &str = "compra-estado-pago";
pub const PAYMENT_TERMS: &str = "compra-terminos-pago";
pub const NOTES: &str = "compra-notas";

pub const SUPPLIER_NAME: &str = "compra-proveedor-nombre";
pub const SUPPLIER_CONTACT: &str = "compra-proveedor-contacto";
pub const SUPPLIER_PHONE: &str = "compra-proveedor-telefono";
pub const SUPPLIER_EMAIL: &str = "compra-proveedor-email";

pub const TOTAL_QUANTITY: &str = "compra-cantidad-total";
pub const LINES_SUBTOTAL: &str = "compra-subtotal-calculado";
pub const TOTAL: &str = "compra-total";
pub const TOTAL_PAID: &str = "compra-total-pagado";
pub const BALANCE_DUE: &str = "compra-saldo-pendiente";

pub const LINES_BODY: &str = "compra-productos-body";
pub const PAYMENTS_BODY: &str = "compra-pagos-body";

pub const BACK_BUTTON: &str = "btn-volver-compras";
