//! Sale detail view-model

use contracts::domain::a002_sale::aggregate::{
    ClientRef, DeliveryAddress, ResponsibleUser, SaleDetail, SaleLine,
};

use super::binding as ids;
use crate::shared::date_utils::format_date;
use crate::shared::detail_view::badge::{status_badge, BadgeTone};
use crate::shared::detail_view::payments::{payment_rows, total_paid};
use crate::shared::detail_view::{Cell, DetailView, SlotValue, TableRows};
use crate::shared::format::{format_percent, format_quantity, money, text_or_dash};

/// Client slot of a sale without a registered client
pub const COUNTER_SALE: &str = "VENTA DE MOSTRADOR";
pub const NO_DELIVERY_ADDRESS: &str = "Sin dirección de entrega";
pub const UNASSIGNED: &str = "Sin asignar";
/// Shipping cost of a pickup sale
pub const NOT_APPLICABLE: &str = "N/A";
pub const NO_PRODUCTS: &str = "No hay productos en esta venta";
pub const LINE_COLUMNS: usize = 10;

const ORDER_TONES: &[(&str, BadgeTone)] = &[
    ("pendiente", BadgeTone::Warning),
    ("en_proceso", BadgeTone::Info),
    ("enviada", BadgeTone::Primary),
    ("completada", BadgeTone::Success),
    ("entregada", BadgeTone::Success),
    ("cancelada", BadgeTone::Danger),
    ("anulada", BadgeTone::Danger),
];

const PAYMENT_TONES: &[(&str, BadgeTone)] = &[
    ("pendiente", BadgeTone::Warning),
    ("parcial", BadgeTone::Info),
    ("pagado", BadgeTone::Success),
    ("pagada", BadgeTone::Success),
    ("vencido", BadgeTone::Danger),
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaleTotals {
    pub quantity: f64,
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

pub fn sum_lines(lines: &[SaleLine]) -> SaleTotals {
    lines.iter().fold(SaleTotals::default(), |acc, line| SaleTotals {
        quantity: acc.quantity + line.quantity,
        subtotal: acc.subtotal + line.subtotal,
        discount: acc.discount + line.discount_amount,
        tax: acc.tax + line.tax_amount,
        total: acc.total + line.line_total,
    })
}

/// Formatted shipping cost; pickups never show a cost
pub fn shipping_cost_label(sale: &SaleDetail) -> String {
    if sale.is_pickup() {
        NOT_APPLICABLE.to_string()
    } else {
        money(sale.shipping_cost)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientVm {
    pub name: String,
    pub document: String,
    pub phone: String,
    pub email: String,
}

impl ClientVm {
    fn from_ref(client: Option<&ClientRef>) -> Self {
        match client {
            Some(c) => Self {
                name: text_or_dash(c.name.as_deref()),
                document: text_or_dash(c.document.as_deref()),
                phone: text_or_dash(c.phone.as_deref()),
                email: text_or_dash(c.email.as_deref()),
            },
            None => Self {
                name: COUNTER_SALE.to_string(),
                document: text_or_dash(None),
                phone: text_or_dash(None),
                email: text_or_dash(None),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressVm {
    pub street: String,
    pub city: String,
    pub reference: String,
}

impl AddressVm {
    fn from_address(address: Option<&DeliveryAddress>) -> Self {
        match address {
            Some(a) => Self {
                street: text_or_dash(a.street.as_deref()),
                city: text_or_dash(a.city.as_deref()),
                reference: text_or_dash(a.reference.as_deref()),
            },
            None => Self {
                street: NO_DELIVERY_ADDRESS.to_string(),
                city: text_or_dash(None),
                reference: text_or_dash(None),
            },
        }
    }
}

fn responsible_label(user: Option<&ResponsibleUser>) -> String {
    user.and_then(|u| u.name.as_deref().or(u.email.as_deref()))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNASSIGNED)
        .to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleDetailVm {
    pub code: String,
    pub date: String,
    pub status: SlotValue,
    pub payment_status: SlotValue,
    pub shipping_type: String,
    pub observations: String,
    pub responsible: String,
    pub client: ClientVm,
    pub address: AddressVm,
    pub subtotal: String,
    pub discounts: String,
    pub taxes: String,
    pub shipping_cost: String,
    pub total: String,
    pub total_paid: String,
    pub balance_due: String,
    pub totals: SaleTotals,
    pub lines: TableRows,
    pub payments: TableRows,
}

fn line_rows(lines: &[SaleLine]) -> TableRows {
    let rows = lines
        .iter()
        .map(|line| {
            vec![
                Cell::text(text_or_dash(line.sku.as_deref())),
                Cell::text(text_or_dash(line.product_name.as_deref())),
                Cell::number(format_quantity(line.quantity)),
                Cell::number(money(line.unit_price)),
                Cell::number(money(line.subtotal)),
                Cell::number(format_percent(line.discount_percent)),
                Cell::number(format_percent(line.tax_percent)),
                Cell::number(money(line.discount_amount)),
                Cell::number(money(line.tax_amount)),
                Cell::number(money(line.line_total)),
            ]
        })
        .collect();
    TableRows::new(LINE_COLUMNS, NO_PRODUCTS, rows)
}

impl SaleDetailVm {
    pub fn from_aggregate(sale: &SaleDetail) -> Self {
        Self {
            code: text_or_dash(sale.code.as_deref()),
            date: format_date(sale.date.as_deref()),
            status: status_badge(sale.status.as_deref(), ORDER_TONES),
            payment_status: status_badge(sale.payment_status.as_deref(), PAYMENT_TONES),
            shipping_type: text_or_dash(sale.shipping_type.as_deref()),
            observations: text_or_dash(sale.observations.as_deref()),
            responsible: responsible_label(sale.responsible_user.as_ref()),
            client: ClientVm::from_ref(sale.client.as_ref()),
            address: AddressVm::from_address(sale.delivery_address.as_ref()),
            subtotal: money(sale.subtotal),
            discounts: money(sale.discounts),
            taxes: money(sale.taxes),
            shipping_cost: shipping_cost_label(sale),
            total: money(sale.total),
            total_paid: money(total_paid(&sale.payments)),
            balance_due: money(sale.balance_due),
            totals: sum_lines(&sale.lines),
            lines: line_rows(&sale.lines),
            payments: payment_rows(&sale.payments),
        }
    }
}

impl DetailView for SaleDetailVm {
    fn slots(&self) -> Vec<(&'static str, SlotValue)> {
        vec![
            (ids::CODE, SlotValue::text(&self.code)),
            (ids::DATE, SlotValue::text(&self.date)),
            (ids::STATUS, self.status.clone()),
            (ids::PAYMENT_STATUS, self.payment_status.clone()),
            (ids::SHIPPING_TYPE, SlotValue::text(&self.shipping_type)),
            (ids::OBSERVATIONS, SlotValue::text(&self.observations)),
            (ids::RESPONSIBLE, SlotValue::text(&self.responsible)),
            (ids::CLIENT_NAME, SlotValue::text(&self.client.name)),
            (ids::CLIENT_DOCUMENT, SlotValue::text(&self.client.document)),
            (ids::CLIENT_PHONE, SlotValue::text(&self.client.phone)),
            (ids::CLIENT_EMAIL, SlotValue::text(&self.client.email)),
            (ids::ADDRESS, SlotValue::text(&self.address.street)),
            (ids::CITY, SlotValue::text(&self.address.city)),
            (ids::ADDRESS_REFERENCE, SlotValue::text(&self.address.reference)),
            (ids::SUBTOTAL, SlotValue::text(&self.subtotal)),
            (ids::DISCOUNTS, SlotValue::text(&self.discounts)),
            (ids::TAXES, SlotValue::text(&self.taxes)),
            (ids::SHIPPING_COST, SlotValue::text(&self.shipping_cost)),
            (ids::TOTAL, SlotValue::text(&self.total)),
            (ids::TOTAL_PAID, SlotValue::text(&self.total_paid)),
            (ids::BALANCE_DUE, SlotValue::text(&self.balance_due)),
            (ids::LINES_QUANTITY, SlotValue::text(format_quantity(self.totals.quantity))),
            (ids::LINES_SUBTOTAL, SlotValue::text(money(self.totals.subtotal))),
            (ids::LINES_DISCOUNT, SlotValue::text(money(self.totals.discount))),
            (ids::LINES_TAX, SlotValue::text(money(self.totals.tax))),
            (ids::LINES_TOTAL, SlotValue::text(money(self.totals.total))),
        ]
    }

    fn tables(&self) -> Vec<(&'static str, &TableRows)> {
        vec![(ids::LINES_BODY, &self.lines), (ids::PAYMENTS_BODY, &self.payments)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::PaymentRecord;

    fn line(sku: &str, quantity: f64, unit_price: f64) -> SaleLine {
        let subtotal = quantity * unit_price;
        let tax_amount = subtotal * 0.19;
        SaleLine {
            sku: Some(sku.to_string()),
            product_name: Some(format!("Producto {}", sku)),
            quantity,
            unit_price,
            subtotal,
            discount_percent: 0.0,
            tax_percent: 19.0,
            discount_amount: 0.0,
            tax_amount,
            line_total: subtotal + tax_amount,
        }
    }

    fn sale() -> SaleDetail {
        SaleDetail {
            id: "S1".to_string(),
            code: Some("V-000001".to_string()),
            date: Some("2024-05-02T10:15:00Z".to_string()),
            status: Some("completada".to_string()),
            payment_status: Some("pagado".to_string()),
            total: 134000.0,
            subtotal: 100000.0,
            taxes: 19000.0,
            discounts: 0.0,
            shipping_cost: 15000.0,
            balance_due: 0.0,
            shipping_type: Some("Domicilio".to_string()),
            observations: Some("Llamar antes".to_string()),
            client: Some(ClientRef {
                id: Some("C1".to_string()),
                name: Some("Ana Pérez".to_string()),
                document: Some("1020304050".to_string()),
                phone: Some("3105550000".to_string()),
                email: Some("ana@correo.co".to_string()),
            }),
            delivery_address: Some(DeliveryAddress {
                street: Some("Calle 10 # 5-20".to_string()),
                city: Some("Medellín".to_string()),
                reference: Some("Portería".to_string()),
            }),
            responsible_user: Some(ResponsibleUser {
                name: Some("Laura".to_string()),
                email: Some("laura@tienda.co".to_string()),
            }),
            lines: vec![line("B-7", 2.0, 50000.0)],
            payments: vec![PaymentRecord {
                paid_at: Some("2024-05-02".to_string()),
                method: Some("efectivo".to_string()),
                notes: Some("Pago total".to_string()),
                amount: 134000.0,
            }],
        }
    }

    #[test]
    fn test_every_slot_is_filled() {
        let vm = SaleDetailVm::from_aggregate(&sale());
        let slots = vm.slots();
        assert_eq!(slots.len(), 26);
        for (id, value) in &slots {
            assert!(!value.as_text().is_empty(), "slot {} is empty", id);
            assert_ne!(value.as_text(), "—", "slot {} shows placeholder", id);
        }
        assert_eq!(vm.shipping_cost, "$15,000");
        assert_eq!(vm.date, "02/05/2024");
        assert_eq!(vm.status, SlotValue::badge("Completada", BadgeTone::Success));
    }

    #[test]
    fn test_pickup_hides_shipping_cost() {
        let mut s = sale();
        s.shipping_type = Some("Recogen".to_string());
        s.shipping_cost = 15000.0;
        let vm = SaleDetailVm::from_aggregate(&s);
        assert_eq!(vm.shipping_cost, "N/A");
        assert!(vm
            .slots()
            .contains(&(ids::SHIPPING_COST, SlotValue::text("N/A"))));
    }

    #[test]
    fn test_counter_sale_placeholders() {
        let mut s = sale();
        s.client = None;
        s.delivery_address = None;
        s.responsible_user = None;
        let vm = SaleDetailVm::from_aggregate(&s);
        assert_eq!(vm.client.name, COUNTER_SALE);
        assert_eq!(vm.client.document, "—");
        assert_eq!(vm.address.street, NO_DELIVERY_ADDRESS);
        assert_eq!(vm.responsible, UNASSIGNED);
    }

    #[test]
    fn test_responsible_falls_back_to_email() {
        let mut s = sale();
        s.responsible_user = Some(ResponsibleUser {
            name: None,
            email: Some("caja@tienda.co".to_string()),
        });
        assert_eq!(SaleDetailVm::from_aggregate(&s).responsible, "caja@tienda.co");
    }

    #[test]
    fn test_line_sums_match_input() {
        let mut s = sale();
        s.lines = vec![line("A", 1.0, 1000.0), line("B", 3.0, 2500.0), line("C", 0.5, 4000.0)];
        let vm = SaleDetailVm::from_aggregate(&s);
        let again = SaleDetailVm::from_aggregate(&s);

        assert_eq!(vm.totals, again.totals);
        assert_eq!(
            vm.totals.total,
            s.lines.iter().map(|l| l.line_total).sum::<f64>()
        );
        assert_eq!(vm.totals.quantity, 4.5);
        assert_eq!(vm.lines.rows.len(), 3);
        assert_eq!(vm.lines.rows[1][6], Cell::number("19%"));
    }

    #[test]
    fn test_empty_sale_renders_placeholder_rows() {
        let mut s = sale();
        s.lines.clear();
        s.payments.clear();
        let vm = SaleDetailVm::from_aggregate(&s);
        assert_eq!(vm.lines.placeholder(), Some((10, NO_PRODUCTS)));
        assert_eq!(vm.payments.rendered_row_count(), 1);
        assert_eq!(vm.total_paid, "$0");
    }
}
