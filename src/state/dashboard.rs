//! Dashboard counters and recent-deliveries table.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{DashboardData, RecentDelivery};
use crate::util::generation::RequestGen;
use crate::util::rows::{Cell, TableRow};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardCounters {
    pub total_families: String,
    pub baskets_this_month: String,
    pub total_people: String,
    pub baskets_in_stock: String,
}

impl Default for DashboardCounters {
    fn default() -> Self {
        Self {
            total_families: "0".to_owned(),
            baskets_this_month: "0".to_owned(),
            total_people: "0".to_owned(),
            baskets_in_stock: "0".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub counters: DashboardCounters,
    pub recent_rows: Vec<TableRow>,
    pub generation: RequestGen,
}

impl DashboardState {
    /// Replace counters and rows wholesale.
    pub fn apply(&mut self, data: &DashboardData) {
        self.counters = DashboardCounters {
            total_families: data.total_familias.to_string(),
            baskets_this_month: data.cestas_mes.to_string(),
            total_people: data.total_pessoas.to_string(),
            baskets_in_stock: data.cestas_estoque.to_string(),
        };
        self.recent_rows = recent_delivery_rows(&data.ultimas_entregas);
    }
}

/// Columns: date, family, responsible person, quantity.
pub fn recent_delivery_rows(deliveries: &[RecentDelivery]) -> Vec<TableRow> {
    deliveries
        .iter()
        .enumerate()
        .map(|(i, d)| {
            TableRow::new(
                format!("recent-{i}"),
                vec![
                    Cell::text(d.date.clone()),
                    Cell::text(d.family.clone()),
                    Cell::text(d.responsible.clone()),
                    Cell::text(d.quantity.to_string()),
                ],
            )
        })
        .collect()
}
