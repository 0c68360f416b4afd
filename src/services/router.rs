//! Section activation and loader dispatch.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use futures::future::join_all;
use leptos::logging::log;

use super::Controller;
use crate::net::api::Transport;
use crate::state::nav::{Loader, Section};
use crate::util::browser::Browser;
use crate::util::store::{StoreKind, ViewStore};

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    /// Show `section`, hide every other one, and run its loaders together.
    /// Loader failures are reported by the loaders themselves.
    pub async fn activate_section(&self, section: Section) {
        let Some(loaders) = self.stores.nav.write(|nav| nav.activate(section)) else {
            return;
        };
        log!("section {} active", section.id());
        join_all(loaders.iter().map(|loader| self.run_loader(*loader))).await;
    }

    async fn run_loader(&self, loader: Loader) {
        match loader {
            Loader::Dashboard => self.load_dashboard().await,
            Loader::FamilySelect => self.populate_family_select().await,
            Loader::FamilySearch => self.search_families().await,
            Loader::FamilyFilter => self.populate_family_filter().await,
            Loader::Deliveries => self.list_deliveries().await,
            Loader::SupplyItems => self.load_supply_items().await,
            Loader::Kits => self.load_kits().await,
            Loader::StockBalance => self.load_stock_balance().await,
            Loader::StockMovements => self.load_stock_movements().await,
        }
    }
}
