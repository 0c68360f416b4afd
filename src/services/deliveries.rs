//! Delivery registration and history.

#[cfg(test)]
#[path = "deliveries_test.rs"]
mod deliveries_test;

use leptos::logging::log;

use super::Controller;
use crate::net::api::{self, Transport};
use crate::state::deliveries::delivery_rows;
use crate::state::nav::Section;
use crate::util::browser::Browser;
use crate::util::store::{StoreKind, ViewStore};

pub const DELIVERY_SAVED_MESSAGE: &str = "Entrega registrada com sucesso!";
pub const DELIVERY_SAVE_FALLBACK: &str = "Não foi possível registrar a entrega.";
pub const DELIVERY_LIST_FAILED: &str = "Erro ao carregar entregas.";

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    /// Send the delivery form; same contract as family registration. The
    /// reset form keeps today's date.
    pub async fn submit_delivery(&self) {
        let Some(form) = self.stores.deliveries.write(|s| {
            s.submitting = true;
            s.form.clone()
        }) else {
            return;
        };

        let result = api::create_delivery(&self.transport, &form).await;
        self.stores.deliveries.write(|s| s.submitting = false);

        match result {
            Ok(()) => {
                log!("delivery registered for family {}", form.family_id);
                self.browser.alert(DELIVERY_SAVED_MESSAGE);
                let today = self.browser.today();
                self.stores.deliveries.write(|s| s.reset_form(today));
                self.activate_section(Section::Dashboard).await;
            }
            Err(e) => self.report_submit_failure("delivery registration", DELIVERY_SAVE_FALLBACK, &e),
        }
    }

    /// List deliveries with the filters currently held in state.
    pub async fn list_deliveries(&self) {
        let Some((ticket, filter)) = self.stores.deliveries.write(|s| (s.list_generation.begin(), s.filter.clone()))
        else {
            return;
        };

        match api::list_deliveries(&self.transport, &filter).await {
            Ok(deliveries) => {
                self.stores.deliveries.write(|s| {
                    if s.list_generation.is_current(ticket) {
                        s.rows = delivery_rows(&deliveries);
                    }
                });
            }
            Err(e) => self.report_load_failure("delivery list", DELIVERY_LIST_FAILED, &e),
        }
    }
}
