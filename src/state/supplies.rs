//! Supply items, kits and kit composition.
//!
//! DESIGN
//! ======
//! The supply list feeds two views: the supply table in its own section and
//! the supply select of the kit-item form. Kit items are always shown for
//! the currently selected kit; changing the selection clears them at once
//! and supersedes any in-flight item load.

#[cfg(test)]
#[path = "supplies_test.rs"]
mod supplies_test;

use crate::net::types::{Kit, KitItem, SupplyItem};
use crate::util::forms::parse_id;
use crate::util::generation::RequestGen;
use crate::util::rows::{Cell, RowAction, SelectOption, TableRow, format_quantity, yes_no};

pub const SUPPLY_SELECT_PLACEHOLDER: &str = "Selecione um insumo";
pub const KIT_SELECT_PLACEHOLDER: &str = "Selecione um kit";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuppliesState {
    pub supply_rows: Vec<TableRow>,
    pub supply_options: Vec<SelectOption>,
    pub new_supply_name: String,
    pub new_supply_unit: String,
    pub supply_message: Option<String>,
    pub supplies_generation: RequestGen,

    pub kit_rows: Vec<TableRow>,
    pub kit_options: Vec<SelectOption>,
    /// Raw value of the kit select; empty means no kit selected.
    pub selected_kit: String,
    pub new_kit_name: String,
    pub new_kit_description: String,
    pub kit_message: Option<String>,
    pub kits_generation: RequestGen,

    pub kit_item_rows: Vec<TableRow>,
    pub selected_supply: String,
    pub item_quantity: String,
    pub kit_item_message: Option<String>,
    pub kit_items_generation: RequestGen,
}

impl SuppliesState {
    pub fn selected_kit_id(&self) -> Option<i64> {
        parse_id(&self.selected_kit)
    }

    /// Change the kit selection. Clears the item table and supersedes any
    /// in-flight item load; returns the kit whose items should be fetched.
    pub fn select_kit(&mut self, value: String) -> Option<i64> {
        self.selected_kit = value;
        self.kit_item_rows.clear();
        self.kit_items_generation.invalidate();
        self.selected_kit_id()
    }

    pub fn apply_supplies(&mut self, items: &[SupplyItem]) {
        self.supply_rows = supply_rows(items);
        self.supply_options = supply_options(items);
        if !self.supply_options.iter().any(|o| !o.value.is_empty() && o.value == self.selected_supply) {
            self.selected_supply.clear();
        }
    }

    /// Replace the kit list. The current selection survives only if that
    /// kit is still listed; otherwise selection and items are cleared.
    pub fn apply_kits(&mut self, kits: &[Kit]) {
        self.kit_rows = kit_rows(kits);
        self.kit_options = kit_options(kits);
        let still_listed = self.selected_kit_id().is_some_and(|id| kits.iter().any(|k| k.id == id));
        if !still_listed && !self.selected_kit.is_empty() {
            self.select_kit(String::new());
        }
    }
}

/// Columns: id, name, unit, active.
pub fn supply_rows(items: &[SupplyItem]) -> Vec<TableRow> {
    items
        .iter()
        .map(|i| {
            TableRow::new(
                i.id.to_string(),
                vec![
                    Cell::text(i.id.to_string()),
                    Cell::text(i.name.clone()),
                    Cell::text(i.unit.clone()),
                    Cell::text(yes_no(i.active)),
                ],
            )
        })
        .collect()
}

/// Label format: `"nome (unidade)"`.
pub fn supply_options(items: &[SupplyItem]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(SUPPLY_SELECT_PLACEHOLDER))
        .chain(items.iter().map(|i| SelectOption::new(i.id.to_string(), format!("{} ({})", i.name, i.unit))))
        .collect()
}

/// Columns: id, name, description (blank when absent), active.
pub fn kit_rows(kits: &[Kit]) -> Vec<TableRow> {
    kits.iter()
        .map(|k| {
            TableRow::new(
                k.id.to_string(),
                vec![
                    Cell::text(k.id.to_string()),
                    Cell::text(k.name.clone()),
                    Cell::text(k.description.clone().unwrap_or_default()),
                    Cell::text(yes_no(k.active)),
                ],
            )
        })
        .collect()
}

pub fn kit_options(kits: &[Kit]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(KIT_SELECT_PLACEHOLDER))
        .chain(kits.iter().map(|k| SelectOption::new(k.id.to_string(), k.name.clone())))
        .collect()
}

/// Columns: item id, supply name, quantity, unit, remove action.
pub fn kit_item_rows(items: &[KitItem]) -> Vec<TableRow> {
    items
        .iter()
        .map(|i| {
            TableRow::new(
                i.id.to_string(),
                vec![
                    Cell::text(i.id.to_string()),
                    Cell::text(i.supply_name.clone()),
                    Cell::text(format_quantity(i.quantity)),
                    Cell::text(i.unit.clone()),
                    Cell::Actions(vec![RowAction::RemoveKitItem(i.id)]),
                ],
            )
        })
        .collect()
}
