//! Family registration form and search results.
//!
//! DESIGN
//! ======
//! The registration form is held as the exact request DTO so submission is
//! a clone, and search results are stored as row descriptors.

#[cfg(test)]
#[path = "families_test.rs"]
mod families_test;

use time::Date;

use crate::net::types::{Family, FamilyForm};
use crate::util::forms::age_on;
use crate::util::generation::RequestGen;
use crate::util::rows::{Cell, PLACEHOLDER, RowAction, SelectOption, TableRow, or_placeholder};

/// Columns of the search table: name, CPF, phone, size, reserved, actions.
pub const FAMILY_SEARCH_COLUMNS: u32 = 6;
pub const NO_FAMILIES_MESSAGE: &str = "Nenhuma família encontrada.";
pub const FAMILY_SELECT_PLACEHOLDER: &str = "Selecione uma família";
pub const FAMILY_FILTER_PLACEHOLDER: &str = "Todas as famílias";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FamiliesState {
    pub form: FamilyForm,
    pub submitting: bool,
    pub query: String,
    pub search_rows: Vec<TableRow>,
    pub search_generation: RequestGen,
}

impl FamiliesState {
    /// Store the birth date and derive the age field from it.
    pub fn set_birth_date(&mut self, value: String, today: Date) {
        self.form.age = age_on(&value, today).map(|a| a.to_string()).unwrap_or_default();
        self.form.birth_date = value;
    }
}

/// One row per family, or a single spanning "no results" row.
pub fn family_rows(families: &[Family]) -> Vec<TableRow> {
    if families.is_empty() {
        return vec![TableRow::message(NO_FAMILIES_MESSAGE, FAMILY_SEARCH_COLUMNS)];
    }
    families
        .iter()
        .map(|f| {
            TableRow::new(
                f.id.to_string(),
                vec![
                    Cell::text(f.responsible_name.clone()),
                    Cell::text(f.cpf.clone()),
                    Cell::text(or_placeholder(f.phone.as_deref())),
                    Cell::text(f.household_size.to_string()),
                    Cell::text(PLACEHOLDER),
                    Cell::Actions(vec![RowAction::EditFamily(f.id), RowAction::FamilyDetails(f.id)]),
                ],
            )
        })
        .collect()
}

/// Delivery-form select: `"nome (cpf)"` labels after a placeholder.
pub fn family_select_options(families: &[Family]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(FAMILY_SELECT_PLACEHOLDER))
        .chain(
            families
                .iter()
                .map(|f| SelectOption::new(f.id.to_string(), format!("{} ({})", f.responsible_name, f.cpf))),
        )
        .collect()
}

/// History filter select: name-only labels after an "all" placeholder.
pub fn family_filter_options(families: &[Family]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(FAMILY_FILTER_PLACEHOLDER))
        .chain(families.iter().map(|f| SelectOption::new(f.id.to_string(), f.responsible_name.clone())))
        .collect()
}

/// Multi-line summary shown by the details action.
pub fn family_details_message(family: &Family) -> String {
    format!(
        "Detalhes da Família\n\nResponsável: {}\nCPF: {}\nTelefone: {}\nMembros: {}\nObservações: {}",
        family.responsible_name,
        family.cpf,
        or_placeholder(family.phone.as_deref()),
        family.household_size,
        or_placeholder(family.notes.as_deref()),
    )
}

pub fn edit_pending_message(family_id: i64) -> String {
    format!("Funcionalidade de edição da família {family_id} será implementada.")
}
