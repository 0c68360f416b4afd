//! Basket stock: balance, ledger and incoming entries.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use futures::join;
use leptos::logging::log;

use super::Controller;
use crate::net::api::{self, Transport};
use crate::net::types::StockEntry;
use crate::state::stock::{StockForm, movement_rows};
use crate::util::browser::Browser;
use crate::util::forms::{non_blank, parse_basket_count};
use crate::util::store::{StoreKind, ViewStore};

pub const STOCK_BALANCE_FAILED: &str = "Erro ao carregar saldo do estoque.";
pub const STOCK_MOVEMENTS_FAILED: &str = "Erro ao carregar movimentações do estoque.";
pub const STOCK_ENTRY_SAVED_MESSAGE: &str = "Entrada de estoque registrada com sucesso!";
pub const STOCK_ENTRY_FALLBACK: &str = "Não foi possível registrar a entrada.";

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    pub async fn load_stock_balance(&self) {
        let Some(ticket) = self.stores.stock.write(|s| s.balance_generation.begin()) else {
            return;
        };

        match api::fetch_stock_balance(&self.transport).await {
            Ok(balance) => {
                self.stores.stock.write(|s| {
                    if s.balance_generation.is_current(ticket) {
                        s.balance = Some(balance.baskets);
                    }
                });
            }
            Err(e) => self.report_load_failure("stock balance", STOCK_BALANCE_FAILED, &e),
        }
    }

    pub async fn load_stock_movements(&self) {
        let Some(ticket) = self.stores.stock.write(|s| s.movements_generation.begin()) else {
            return;
        };

        match api::list_stock_movements(&self.transport).await {
            Ok(movements) => {
                self.stores.stock.write(|s| {
                    if s.movements_generation.is_current(ticket) {
                        s.movement_rows = movement_rows(&movements);
                    }
                });
            }
            Err(e) => self.report_load_failure("stock movements", STOCK_MOVEMENTS_FAILED, &e),
        }
    }

    /// Record baskets received. The count must be a positive integer; on
    /// success the form is cleared and balance and ledger are reloaded.
    pub async fn submit_stock_entry(&self) {
        let Some(validated) = self.stores.stock.write(|s| {
            let entry = parse_basket_count(&s.form.quantity).map(|quantity| StockEntry {
                quantity,
                supplier: non_blank(&s.form.supplier),
                notes: non_blank(&s.form.notes),
            });
            s.message = entry.as_ref().err().map(ToString::to_string);
            s.submitting = entry.is_ok();
            entry.ok()
        }) else {
            return;
        };
        let Some(entry) = validated else {
            return;
        };

        let result = api::create_stock_entry(&self.transport, &entry).await;
        self.stores.stock.write(|s| s.submitting = false);

        match result {
            Ok(()) => {
                log!("stock entry of {} baskets registered", entry.quantity);
                self.browser.alert(STOCK_ENTRY_SAVED_MESSAGE);
                self.stores.stock.write(|s| s.form = StockForm::default());
                join!(self.load_stock_balance(), self.load_stock_movements());
            }
            Err(e) => self.report_submit_failure("stock entry", STOCK_ENTRY_FALLBACK, &e),
        }
    }
}
