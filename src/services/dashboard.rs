//! Dashboard loader.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::Controller;
use crate::net::api::{self, Transport};
use crate::util::browser::Browser;
use crate::util::store::{StoreKind, ViewStore};

pub const DASHBOARD_FAILED: &str = "Erro ao carregar dados do dashboard.";

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    pub async fn load_dashboard(&self) {
        let Some(ticket) = self.stores.dashboard.write(|s| s.generation.begin()) else {
            return;
        };

        match api::fetch_dashboard(&self.transport).await {
            Ok(data) => {
                self.stores.dashboard.write(|s| {
                    if s.generation.is_current(ticket) {
                        s.apply(&data);
                    }
                });
            }
            Err(e) => self.report_load_failure("dashboard", DASHBOARD_FAILED, &e),
        }
    }
}
