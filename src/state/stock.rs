//! Basket stock balance, ledger and entry form.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use crate::net::types::StockMovement;
use crate::util::generation::RequestGen;
use crate::util::rows::{Cell, TableRow, or_placeholder};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockForm {
    pub quantity: String,
    pub supplier: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StockState {
    /// Baskets currently in stock; `None` until the first load.
    pub balance: Option<i64>,
    pub movement_rows: Vec<TableRow>,
    pub form: StockForm,
    pub message: Option<String>,
    pub submitting: bool,
    pub balance_generation: RequestGen,
    pub movements_generation: RequestGen,
}

impl StockState {
    pub fn balance_label(&self) -> String {
        self.balance.map_or_else(|| "0".to_owned(), |b| b.to_string())
    }
}

/// Columns: date, in, out, reason, responsible.
pub fn movement_rows(movements: &[StockMovement]) -> Vec<TableRow> {
    movements
        .iter()
        .enumerate()
        .map(|(i, m)| {
            TableRow::new(
                format!("movement-{i}"),
                vec![
                    Cell::text(m.date.clone()),
                    Cell::text(m.quantity_in.to_string()),
                    Cell::text(m.quantity_out.to_string()),
                    Cell::text(or_placeholder(m.reason.as_deref())),
                    Cell::text(or_placeholder(m.responsible.as_deref())),
                ],
            )
        })
        .collect()
}
