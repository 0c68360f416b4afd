//! Family registration, search, details and select population.

#[cfg(test)]
#[path = "families_test.rs"]
mod families_test;

use leptos::logging::{error, log};

use super::Controller;
use crate::net::api::{self, Transport};
use crate::net::types::{Family, FamilyForm};
use crate::state::families::{
    edit_pending_message, family_details_message, family_filter_options, family_rows, family_select_options,
};
use crate::state::nav::Section;
use crate::util::browser::Browser;
use crate::util::forms::non_blank;
use crate::util::store::{StoreKind, ViewStore};

pub const FAMILY_SAVED_MESSAGE: &str = "Cadastro salvo com sucesso!";
pub const FAMILY_SAVE_FALLBACK: &str = "Não foi possível salvar.";
pub const FAMILY_SEARCH_FAILED: &str = "Erro ao buscar famílias.";
pub const FAMILY_DETAILS_FAILED: &str = "Erro ao carregar detalhes.";
pub const FAMILY_OPTIONS_FAILED: &str = "Erro ao carregar lista de famílias.";
pub const CLEAR_FORM_PROMPT: &str = "Tem certeza que deseja limpar o formulário?";

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    /// Send the registration form. On success the form is cleared and the
    /// dashboard is shown.
    pub async fn submit_family(&self) {
        let Some(form) = self.stores.families.write(|s| {
            s.submitting = true;
            s.form.clone()
        }) else {
            return;
        };

        let result = api::create_family(&self.transport, &form).await;
        self.stores.families.write(|s| s.submitting = false);

        match result {
            Ok(()) => {
                log!("family registered");
                self.browser.alert(FAMILY_SAVED_MESSAGE);
                self.stores.families.write(|s| s.form = FamilyForm::default());
                self.activate_section(Section::Dashboard).await;
            }
            Err(e) => self.report_submit_failure("family registration", FAMILY_SAVE_FALLBACK, &e),
        }
    }

    /// Search with the query currently held in state.
    pub async fn search_families(&self) {
        let Some((ticket, query)) = self.stores.families.write(|s| (s.search_generation.begin(), s.query.clone()))
        else {
            return;
        };

        match api::search_families(&self.transport, non_blank(&query).as_deref()).await {
            Ok(families) => {
                self.stores.families.write(|s| {
                    if s.search_generation.is_current(ticket) {
                        s.search_rows = family_rows(&families);
                    }
                });
            }
            Err(e) => self.report_load_failure("family search", FAMILY_SEARCH_FAILED, &e),
        }
    }

    /// Empty the query and list every family.
    pub async fn clear_search(&self) {
        self.stores.families.write(|s| s.query.clear());
        self.search_families().await;
    }

    /// Look the family up by id and show a summary. No match is a no-op.
    pub async fn show_family_details(&self, family_id: i64) {
        match api::search_families(&self.transport, Some(&family_id.to_string())).await {
            Ok(families) => {
                if let Some(family) = families.first() {
                    self.browser.alert(&family_details_message(family));
                }
            }
            Err(e) => self.report_load_failure("family details", FAMILY_DETAILS_FAILED, &e),
        }
    }

    /// Editing is not available yet; only a notice is shown.
    pub fn edit_family(&self, family_id: i64) {
        self.browser.alert(&edit_pending_message(family_id));
    }

    /// Reset the registration form after the user confirms.
    pub fn clear_family_form(&self) {
        if self.browser.confirm(CLEAR_FORM_PROMPT) {
            self.stores.families.write(|s| s.form = FamilyForm::default());
        }
    }

    pub fn set_birth_date(&self, value: String) {
        let today = self.browser.today();
        self.stores.families.write(|s| s.set_birth_date(value, today));
    }

    /// Fill the delivery form's family select.
    pub async fn populate_family_select(&self) {
        let Some(ticket) = self.stores.deliveries.write(|s| s.options_generation.begin()) else {
            return;
        };
        if let Some(families) = self.fetch_all_families().await {
            self.stores.deliveries.write(|s| {
                if s.options_generation.is_current(ticket) {
                    s.family_options = family_select_options(&families);
                }
            });
        }
    }

    /// Fill the history section's family filter.
    pub async fn populate_family_filter(&self) {
        let Some(ticket) = self.stores.deliveries.write(|s| s.filter_options_generation.begin()) else {
            return;
        };
        if let Some(families) = self.fetch_all_families().await {
            self.stores.deliveries.write(|s| {
                if s.filter_options_generation.is_current(ticket) {
                    s.filter_options = family_filter_options(&families);
                }
            });
        }
    }

    async fn fetch_all_families(&self) -> Option<Vec<Family>> {
        match api::search_families(&self.transport, None).await {
            Ok(families) => Some(families),
            Err(e) => {
                error!("family list failed: {e}");
                self.browser.alert(FAMILY_OPTIONS_FAILED);
                None
            }
        }
    }
}
