//! Supply items, kits and kit composition.
//!
//! Validation failures are written to the section's inline message slot
//! and never reach the network. Request failures are alerted.

#[cfg(test)]
#[path = "supplies_test.rs"]
mod supplies_test;

use leptos::logging::log;

use super::Controller;
use crate::net::api::{self, Transport};
use crate::net::types::{KitItemUpsert, NewKit, NewSupplyItem};
use crate::state::supplies::kit_item_rows;
use crate::util::browser::Browser;
use crate::util::forms::{ValidationError, non_blank, parse_id, parse_quantity};
use crate::util::store::{StoreKind, ViewStore};

pub const SUPPLIES_FAILED: &str = "Erro ao carregar insumos.";
pub const SUPPLY_SAVE_FALLBACK: &str = "Não foi possível salvar o insumo.";
pub const KITS_FAILED: &str = "Erro ao carregar kits.";
pub const KIT_SAVE_FALLBACK: &str = "Não foi possível salvar o kit.";
pub const KIT_ITEMS_FAILED: &str = "Erro ao carregar itens do kit.";
pub const KIT_ITEM_SAVE_FALLBACK: &str = "Não foi possível salvar o item do kit.";
pub const KIT_ITEM_REMOVE_FALLBACK: &str = "Não foi possível remover o item.";
pub const REMOVE_KIT_ITEM_PROMPT: &str = "Remover este item do kit?";

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    // =============================================================
    // Supply items
    // =============================================================

    /// One fetch feeds both the supply table and the kit-item supply select.
    pub async fn load_supply_items(&self) {
        let Some(ticket) = self.stores.supplies.write(|s| s.supplies_generation.begin()) else {
            return;
        };

        match api::list_supply_items(&self.transport).await {
            Ok(items) => {
                self.stores.supplies.write(|s| {
                    if s.supplies_generation.is_current(ticket) {
                        s.apply_supplies(&items);
                    }
                });
            }
            Err(e) => self.report_load_failure("supply list", SUPPLIES_FAILED, &e),
        }
    }

    pub async fn submit_supply_item(&self) {
        let Some(fields) = self.stores.supplies.write(|s| {
            let fields = match (non_blank(&s.new_supply_name), non_blank(&s.new_supply_unit)) {
                (Some(name), Some(unit)) => Some(NewSupplyItem { name, unit }),
                _ => None,
            };
            s.supply_message = fields.is_none().then(|| ValidationError::SupplyFieldsRequired.to_string());
            fields
        }) else {
            return;
        };
        let Some(item) = fields else {
            return;
        };

        match api::create_supply_item(&self.transport, &item).await {
            Ok(()) => {
                log!("supply item {} created", item.name);
                self.stores.supplies.write(|s| {
                    s.new_supply_name.clear();
                    s.new_supply_unit.clear();
                });
                self.load_supply_items().await;
            }
            Err(e) => self.report_submit_failure("supply item creation", SUPPLY_SAVE_FALLBACK, &e),
        }
    }

    // =============================================================
    // Kits
    // =============================================================

    pub async fn load_kits(&self) {
        let Some(ticket) = self.stores.supplies.write(|s| s.kits_generation.begin()) else {
            return;
        };

        match api::list_kits(&self.transport).await {
            Ok(kits) => {
                self.stores.supplies.write(|s| {
                    if s.kits_generation.is_current(ticket) {
                        s.apply_kits(&kits);
                    }
                });
            }
            Err(e) => self.report_load_failure("kit list", KITS_FAILED, &e),
        }
    }

    pub async fn submit_kit(&self) {
        let Some(fields) = self.stores.supplies.write(|s| {
            let kit = non_blank(&s.new_kit_name)
                .map(|name| NewKit { name, description: non_blank(&s.new_kit_description) });
            s.kit_message = kit.is_none().then(|| ValidationError::KitNameRequired.to_string());
            kit
        }) else {
            return;
        };
        let Some(kit) = fields else {
            return;
        };

        match api::create_kit(&self.transport, &kit).await {
            Ok(()) => {
                log!("kit {} created", kit.name);
                self.stores.supplies.write(|s| {
                    s.new_kit_name.clear();
                    s.new_kit_description.clear();
                });
                self.load_kits().await;
            }
            Err(e) => self.report_submit_failure("kit creation", KIT_SAVE_FALLBACK, &e),
        }
    }

    // =============================================================
    // Kit items
    // =============================================================

    /// Handle a change of the kit select: the item table is cleared at once
    /// and reloaded only when a kit is selected.
    pub async fn select_kit(&self, value: String) {
        let Some(Some(_)) = self.stores.supplies.write(|s| s.select_kit(value)) else {
            return;
        };
        self.load_kit_items().await;
    }

    /// Load the items of the selected kit. Without a selection an inline
    /// warning is shown and nothing is fetched.
    pub async fn load_kit_items(&self) {
        let Some(Some((kit_id, ticket))) = self.stores.supplies.write(|s| match s.selected_kit_id() {
            Some(kit_id) => {
                s.kit_item_message = None;
                Some((kit_id, s.kit_items_generation.begin()))
            }
            None => {
                s.kit_item_message = Some(ValidationError::KitNotSelected.to_string());
                None
            }
        }) else {
            return;
        };

        match api::list_kit_items(&self.transport, kit_id).await {
            Ok(items) => {
                self.stores.supplies.write(|s| {
                    if s.kit_items_generation.is_current(ticket) {
                        s.kit_item_rows = kit_item_rows(&items);
                    }
                });
            }
            Err(e) => self.report_load_failure("kit items", KIT_ITEMS_FAILED, &e),
        }
    }

    /// Add a supply item to the selected kit, or update its quantity.
    pub async fn submit_kit_item(&self) {
        let Some(validated) = self.stores.supplies.write(|s| {
            let validated = validate_kit_item(&s.selected_kit, &s.selected_supply, &s.item_quantity);
            s.kit_item_message = validated.as_ref().err().map(ToString::to_string);
            validated.ok()
        }) else {
            return;
        };
        let Some((kit_id, item)) = validated else {
            return;
        };

        match api::upsert_kit_item(&self.transport, kit_id, &item).await {
            Ok(()) => {
                log!("kit {kit_id}: supply {} set to {}", item.insumo_id, item.quantity);
                self.stores.supplies.write(|s| s.item_quantity.clear());
                self.load_kit_items().await;
            }
            Err(e) => self.report_submit_failure("kit item upsert", KIT_ITEM_SAVE_FALLBACK, &e),
        }
    }

    /// Remove one item from the selected kit after confirmation.
    pub async fn remove_kit_item(&self, item_id: i64) {
        if !self.browser.confirm(REMOVE_KIT_ITEM_PROMPT) {
            return;
        }

        match api::delete_kit_item(&self.transport, item_id).await {
            Ok(()) => {
                log!("kit item {item_id} removed");
                self.load_kit_items().await;
            }
            Err(e) => self.report_submit_failure("kit item removal", KIT_ITEM_REMOVE_FALLBACK, &e),
        }
    }
}

/// Check kit, supply item and quantity, in that order.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_kit_item(kit: &str, supply: &str, quantity: &str) -> Result<(i64, KitItemUpsert), ValidationError> {
    let kit_id = parse_id(kit).ok_or(ValidationError::KitNotSelected)?;
    let insumo_id = parse_id(supply).ok_or(ValidationError::SupplyNotSelected)?;
    let quantity = parse_quantity(quantity)?;
    Ok((kit_id, KitItemUpsert { insumo_id, quantity }))
}
