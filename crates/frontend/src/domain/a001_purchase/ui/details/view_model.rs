//! Purchase detail view-model
//!
//! Pure mapping from [`PurchaseDetail`] to display slots and table rows.

use contracts::domain::a001_purchase::aggregate::{PurchaseDetail, PurchaseLine, SupplierRef};

use super::binding as ids;
use crate::shared::date_utils::format_date;
use crate::shared::detail_view::badge::{status_badge, BadgeTone};
use crate::shared::detail_view::payments::{payment_rows, total_paid};
use crate::shared::detail_view::{Cell, DetailView, SlotValue, TableRows};
use crate::shared::format::{format_quantity, money, text_or_dash};

/// Shown in place of a supplier record that no longer exists
pub const DELETED_SUPPLIER: &str = "PROVEEDOR ELIMINADO";
pub const NO_PRODUCTS: &str = "No hay productos en esta compra";
pub const LINE_COLUMNS: usize = 5;

const RECEPTION_TONES: &[(&str, BadgeTone)] = &[
    ("pendiente", BadgeTone::Warning),
    ("parcial", BadgeTone::Info),
    ("recibida", BadgeTone::Success),
    ("cancelada", BadgeTone::Danger),
];

const PAYMENT_TONES: &[(&str, BadgeTone)] = &[
    ("pendiente", BadgeTone::Warning),
    ("parcial", BadgeTone::Info),
    ("pagada", BadgeTone::Success),
    ("vencida", BadgeTone::Danger),
];

/// Sums over the purchase lines
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PurchaseTotals {
    pub quantity: f64,
    pub subtotal: f64,
}

pub fn sum_lines(lines: &[PurchaseLine]) -> PurchaseTotals {
    lines.iter().fold(PurchaseTotals::default(), |acc, line| PurchaseTotals {
        quantity: acc.quantity + line.quantity,
        subtotal: acc.subtotal + line.subtotal,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierVm {
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
}

impl SupplierVm {
    fn from_ref(supplier: Option<&SupplierRef>) -> Self {
        match supplier {
            Some(s) => Self {
                name: text_or_dash(s.name.as_deref()),
                contact: text_or_dash(s.contact.as_deref()),
                phone: text_or_dash(s.phone.as_deref()),
                email: text_or_dash(s.email.as_deref()),
            },
            None => Self {
                name: DELETED_SUPPLIER.to_string(),
                contact: text_or_dash(None),
                phone: text_or_dash(None),
                email: text_or_dash(None),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDetailVm {
    pub invoice_number: String,
    pub date: String,
    pub status: SlotValue,
    pub payment_status: SlotValue,
    pub payment_terms: String,
    pub notes: String,
    pub supplier: SupplierVm,
    pub totals: PurchaseTotals,
    pub total: String,
    pub total_paid: String,
    pub balance_due: String,
    pub lines: TableRows,
    pub payments: TableRows,
}

fn line_rows(lines: &[PurchaseLine]) -> TableRows {
    let rows = lines
        .iter()
        .map(|line| {
            vec![
                Cell::text(text_or_dash(line.sku.as_deref())),
                Cell::text(text_or_dash(line.product_name.as_deref())),
                Cell::number(format_quantity(line.quantity)),
                Cell::number(money(line.unit_price)),
                Cell::number(money(line.subtotal)),
            ]
        })
        .collect();
    TableRows::new(LINE_COLUMNS, NO_PRODUCTS, rows)
}

impl PurchaseDetailVm {
    pub fn from_aggregate(purchase: &PurchaseDetail) -> Self {
        Self {
            invoice_number: text_or_dash(purchase.invoice_number.as_deref()),
            date: format_date(purchase.date.as_deref()),
            status: status_badge(purchase.status.as_deref(), RECEPTION_TONES),
            payment_status: status_badge(purchase.payment_status.as_deref(), PAYMENT_TONES),
            payment_terms: text_or_dash(purchase.payment_terms.as_deref()),
            notes: text_or_dash(purchase.notes.as_deref()),
            supplier: SupplierVm::from_ref(purchase.supplier.as_ref()),
            totals: sum_lines(&purchase.lines),
            total: money(purchase.total),
            total_paid: money(total_paid(&purchase.payments)),
            balance_due: money(purchase.balance_due),
            lines: line_rows(&purchase.lines),
            payments: payment_rows(&purchase.payments),
        }
    }
}

impl DetailView for PurchaseDetailVm {
    fn slots(&self) -> Vec<(&'static str, SlotValue)> {
        vec![
            (ids::INVOICE_NUMBER, SlotValue::text(&self.invoice_number)),
            (ids::DATE, SlotValue::text(&self.date)),
            (ids::STATUS, self.status.clone()),
            (ids::PAYMENT_STATUS, self.payment_status.clone()),
            (ids::PAYMENT_TERMS, SlotValue::text(&self.payment_terms)),
            (ids::NOTES, SlotValue::text(&self.notes)),
            (ids::SUPPLIER_NAME, SlotValue::text(&self.supplier.name)),
            (ids::SUPPLIER_CONTACT, SlotValue::text(&self.supplier.contact)),
            (ids::SUPPLIER_PHONE, SlotValue::text(&self.supplier.phone)),
            (ids::SUPPLIER_EMAIL, SlotValue::text(&self.supplier.email)),
            (ids::TOTAL_QUANTITY, SlotValue::text(format_quantity(self.totals.quantity))),
            (ids::LINES_SUBTOTAL, SlotValue::text(money(self.totals.subtotal))),
            (ids::TOTAL, SlotValue::text(&self.total)),
            (ids::TOTAL_PAID, SlotValue::text(&self.total_paid)),
            (ids::BALANCE_DUE, SlotValue::text(&self.balance_due)),
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

    fn line(sku: &str, quantity: f64, unit_price: f64) -> PurchaseLine {
        PurchaseLine {
            sku: Some(sku.to_string()),
            product_name: Some(format!("Producto {}", sku)),
            quantity,
            unit_price,
            subtotal: quantity * unit_price,
        }
    }

    fn purchase() -> PurchaseDetail {
        PurchaseDetail {
            id: "P1".to_string(),
            invoice_number: Some("FC-0001".to_string()),
            date: Some("2024-03-15".to_string()),
            status: Some("recibida".to_string()),
            payment_status: Some("parcial".to_string()),
            total: 250000.0,
            balance_due: 50000.0,
            payment_terms: Some("30 días".to_string()),
            notes: Some("Entrega en bodega".to_string()),
            supplier: Some(SupplierRef {
                id: Some("S9".to_string()),
                name: Some("Distribuidora Andina".to_string()),
                contact: Some("Mario".to_string()),
                phone: Some("3001234567".to_string()),
                email: Some("ventas@andina.co".to_string()),
            }),
            lines: vec![line("A-1", 10.0, 20000.0), line("A-2", 5.0, 10000.0)],
            payments: vec![PaymentRecord {
                paid_at: Some("2024-03-16".to_string()),
                method: Some("transferencia".to_string()),
                notes: Some("Anticipo".to_string()),
                amount: 200000.0,
            }],
        }
    }

    #[test]
    fn test_every_slot_is_filled() {
        let vm = PurchaseDetailVm::from_aggregate(&purchase());
        let slots = vm.slots();
        assert_eq!(slots.len(), 15);
        for (id, value) in &slots {
            assert!(!value.as_text().is_empty(), "slot {} is empty", id);
            assert_ne!(value.as_text(), "—", "slot {} shows placeholder", id);
        }
        assert_eq!(vm.date, "15/03/2024");
        assert_eq!(vm.total, "$250,000");
        assert_eq!(vm.total_paid, "$200,000");
        assert_eq!(vm.status, SlotValue::badge("Recibida", BadgeTone::Success));
        assert_eq!(vm.payment_status, SlotValue::badge("Parcial", BadgeTone::Info));
    }

    #[test]
    fn test_deleted_supplier() {
        let mut p = purchase();
        p.supplier = None;
        let vm = PurchaseDetailVm::from_aggregate(&p);
        assert_eq!(vm.supplier.name, DELETED_SUPPLIER);
        assert_eq!(vm.supplier.phone, "—");
        assert!(vm
            .slots()
            .contains(&(ids::SUPPLIER_NAME, SlotValue::text("PROVEEDOR ELIMINADO"))));
    }

    #[test]
    fn test_empty_purchase_renders_placeholder_rows() {
        let mut p = purchase();
        p.lines.clear();
        p.payments.clear();
        let vm = PurchaseDetailVm::from_aggregate(&p);

        assert_eq!(vm.lines.placeholder(), Some((LINE_COLUMNS, NO_PRODUCTS)));
        assert_eq!(vm.lines.rendered_row_count(), 1);
        assert_eq!(vm.payments.placeholder().map(|(cols, _)| cols), Some(4));
        assert_eq!(vm.totals, PurchaseTotals::default());
    }

    #[test]
    fn test_sums_are_idempotent() {
        let p = purchase();
        let first = PurchaseDetailVm::from_aggregate(&p);
        let second = PurchaseDetailVm::from_aggregate(&p);
        assert_eq!(first, second);
        assert_eq!(first.totals.quantity, 15.0);
        assert_eq!(
            first.totals.subtotal,
            p.lines.iter().map(|l| l.subtotal).sum::<f64>()
        );
    }

    #[test]
    fn test_lines_keep_backend_order() {
        let vm = PurchaseDetailVm::from_aggregate(&purchase());
        let skus: Vec<&str> = vm.lines.rows.iter().map(|r| r[0].text.as_str()).collect();
        assert_eq!(skus, vec!["A-1", "A-2"]);
        assert_eq!(vm.lines.rows[0][3], Cell::number("$20,000"));
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        let mut p = purchase();
        p.status = Some("en_revision".to_string());
        let vm = PurchaseDetailVm::from_aggregate(&p);
        assert_eq!(vm.status, SlotValue::badge("En revision", BadgeTone::Neutral));
    }
}
