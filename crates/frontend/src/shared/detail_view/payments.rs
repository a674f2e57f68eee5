//! Payments table shared by purchases and sales

use contracts::domain::common::PaymentRecord;

use super::view::{Cell, TableRows};
use crate::shared::date_utils::format_date;
use crate::shared::format::{money, text_or_dash};

pub const PAYMENT_COLUMNS: usize = 4;
pub const NO_PAYMENTS: &str = "No hay pagos registrados";

/// Fecha | Método | Notas | Monto
pub fn payment_rows(payments: &[PaymentRecord]) -> TableRows {
    let rows = payments
        .iter()
        .map(|p| {
            vec![
                Cell::text(format_date(p.paid_at.as_deref())),
                Cell::text(text_or_dash(p.method.as_deref())),
                Cell::text(text_or_dash(p.notes.as_deref())),
                Cell::number(money(p.amount)),
            ]
        })
        .collect();
    TableRows::new(PAYMENT_COLUMNS, NO_PAYMENTS, rows)
}

pub fn total_paid(payments: &[PaymentRecord]) -> f64 {
    payments.iter().map(|p| p.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_rows() {
        let payments = vec![PaymentRecord {
            paid_at: Some("2024-03-16".to_string()),
            method: Some("transferencia".to_string()),
            notes: None,
            amount: 200000.0,
        }];
        let table = payment_rows(&payments);
        assert_eq!(table.columns, 4);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0].text, "16/03/2024");
        assert_eq!(table.rows[0][2].text, "—");
        assert_eq!(table.rows[0][3], Cell::number("$200,000"));
        assert_eq!(total_paid(&payments), 200000.0);
    }

    #[test]
    fn test_no_payments_placeholder() {
        let table = payment_rows(&[]);
        assert_eq!(table.placeholder(), Some((4, NO_PAYMENTS)));
        assert_eq!(total_paid(&[]), 0.0);
    }
}
