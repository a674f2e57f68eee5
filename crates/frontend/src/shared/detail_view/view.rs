//! Typed view-model pieces shared by every detail view
//!
//! A view-model exposes its content as element-id keyed slots and table
//! bodies; that list is the whole contract with the markup fragment.

use super::badge::BadgeTone;

/// Value written into one fixed element of the fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    Text(String),
    Badge { text: String, tone: BadgeTone },
}

impl SlotValue {
    pub fn text(value: impl Into<String>) -> Self {
        SlotValue::Text(value.into())
    }

    pub fn badge(text: impl Into<String>, tone: BadgeTone) -> Self {
        SlotValue::Badge {
            text: text.into(),
            tone,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            SlotValue::Text(text) | SlotValue::Badge { text, .. } => text,
        }
    }
}

/// Table cell; numeric cells are right-aligned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub numeric: bool,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            numeric: false,
        }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            numeric: true,
        }
    }
}

/// Rows of one table body, in backend order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRows {
    pub columns: usize,
    pub rows: Vec<Vec<Cell>>,
    /// Text of the single spanning row shown when `rows` is empty
    pub empty_text: &'static str,
}

impl TableRows {
    pub fn new(columns: usize, empty_text: &'static str, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            columns,
            rows,
            empty_text,
        }
    }

    /// `(colspan, text)` of the placeholder row, if the table is empty
    pub fn placeholder(&self) -> Option<(usize, &'static str)> {
        if self.rows.is_empty() {
            Some((self.columns, self.empty_text))
        } else {
            None
        }
    }

    /// Number of `<tr>` elements the table body ends up with
    pub fn rendered_row_count(&self) -> usize {
        self.rows.len().max(1)
    }
}

/// View-model of a detail view
pub trait DetailView: Clone + PartialEq + Send + Sync + 'static {
    /// Element id → value, for every fixed display slot
    fn slots(&self) -> Vec<(&'static str, SlotValue)>;

    /// Table body id → rows
    fn tables(&self) -> Vec<(&'static str, &TableRows)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_one_spanning_row() {
        let table = TableRows::new(5, "No hay productos", vec![]);
        assert_eq!(table.placeholder(), Some((5, "No hay productos")));
        assert_eq!(table.rendered_row_count(), 1);
    }

    #[test]
    fn test_filled_table_has_no_placeholder() {
        let table = TableRows::new(2, "Sin pagos", vec![vec![Cell::text("a"), Cell::number("1")]]);
        assert_eq!(table.placeholder(), None);
        assert_eq!(table.rendered_row_count(), 1);
    }
}
