//! Delivery form, history filters and history table.
//!
//! The history table deliberately has no empty-state row: an empty result
//! leaves the table body empty, unlike family search.

#[cfg(test)]
#[path = "deliveries_test.rs"]
mod deliveries_test;

use time::Date;

use crate::net::api::DeliveryFilter;
use crate::net::types::{Delivery, DeliveryForm};
use crate::util::forms::format_iso_date;
use crate::util::generation::RequestGen;
use crate::util::rows::{Cell, SelectOption, TableRow};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeliveriesState {
    pub form: DeliveryForm,
    pub submitting: bool,
    /// Options of the family select in the delivery form.
    pub family_options: Vec<SelectOption>,
    pub filter: DeliveryFilter,
    /// Options of the family filter in the history section.
    pub filter_options: Vec<SelectOption>,
    pub rows: Vec<TableRow>,
    pub list_generation: RequestGen,
    pub options_generation: RequestGen,
    pub filter_options_generation: RequestGen,
}

impl DeliveriesState {
    pub fn new(today: Date) -> Self {
        let mut state = Self::default();
        state.reset_form(today);
        state
    }

    /// Clear the form, keeping the delivery date on `today`.
    pub fn reset_form(&mut self, today: Date) {
        self.form = DeliveryForm { date: format_iso_date(today), ..DeliveryForm::default() };
    }
}

/// Columns: date, family, responsible person, quantity, delivered by.
pub fn delivery_rows(deliveries: &[Delivery]) -> Vec<TableRow> {
    deliveries
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let key = d.id.map_or_else(|| format!("row-{i}"), |id| id.to_string());
            TableRow::new(
                key,
                vec![
                    Cell::text(d.date.clone()),
                    Cell::text(d.family_name.clone()),
                    Cell::text(d.responsible.clone()),
                    Cell::text(d.quantity.to_string()),
                    Cell::text(d.delivered_by.clone()),
                ],
            )
        })
        .collect()
}
