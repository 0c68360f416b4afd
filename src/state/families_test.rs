use super::*;
use time::macros::date;

fn family(id: i64, name: &str, cpf: &str, phone: Option<&str>) -> Family {
    Family {
        id,
        responsible_name: name.to_owned(),
        cpf: cpf.to_owned(),
        phone: phone.map(str::to_owned),
        household_size: 4,
        child_count: Some(2),
        notes: None,
        last_delivery: None,
    }
}

// =============================================================
// Search rows
// =============================================================

#[test]
fn empty_search_renders_single_no_results_row() {
    let rows = family_rows(&[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells, vec![Cell::Wide { text: NO_FAMILIES_MESSAGE.to_owned(), span: 6 }]);
}

#[test]
fn search_renders_one_row_per_family_with_six_columns() {
    let rows = family_rows(&[family(1, "Ana", "111", Some("9999")), family(2, "Bia", "222", None)]);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.cells.len() == 6));
    assert_eq!(rows[0].texts(), vec!["Ana", "111", "9999", "4", "—", "Editar Detalhes"]);
    assert_eq!(rows[1].cells[2], Cell::text("—"));
    assert_eq!(rows[1].cells[5], Cell::Actions(vec![RowAction::EditFamily(2), RowAction::FamilyDetails(2)]));
    assert_eq!(rows[1].key, "2");
}

// =============================================================
// Selects
// =============================================================

#[test]
fn select_options_show_name_and_cpf_after_placeholder() {
    let options = family_select_options(&[family(3, "Carla", "333", None)]);
    assert_eq!(
        options,
        vec![SelectOption::placeholder("Selecione uma família"), SelectOption::new("3", "Carla (333)")]
    );
}

#[test]
fn filter_options_show_name_only() {
    let options = family_filter_options(&[family(3, "Carla", "333", None)]);
    assert_eq!(options, vec![SelectOption::placeholder("Todas as famílias"), SelectOption::new("3", "Carla")]);
}

#[test]
fn select_options_with_no_families_keep_placeholder() {
    assert_eq!(family_select_options(&[]).len(), 1);
}

// =============================================================
// Messages and form
// =============================================================

#[test]
fn details_message_lists_fields() {
    let mut f = family(5, "Dora", "555", Some("(11) 1234-5678"));
    f.notes = Some("Aluguel atrasado".to_owned());
    assert_eq!(
        family_details_message(&f),
        "Detalhes da Família\n\nResponsável: Dora\nCPF: 555\nTelefone: (11) 1234-5678\nMembros: 4\nObservações: Aluguel atrasado"
    );
}

#[test]
fn details_message_uses_placeholder_for_missing_notes() {
    let message = family_details_message(&family(5, "Dora", "555", None));
    assert!(message.ends_with("Observações: —"));
}

#[test]
fn edit_pending_message_names_family() {
    assert_eq!(edit_pending_message(9), "Funcionalidade de edição da família 9 será implementada.");
}

#[test]
fn set_birth_date_derives_age() {
    let mut state = FamiliesState::default();
    state.set_birth_date("1980-12-31".to_owned(), date!(2025 - 06 - 01));
    assert_eq!(state.form.birth_date, "1980-12-31");
    assert_eq!(state.form.age, "44");

    state.set_birth_date(String::new(), date!(2025 - 06 - 01));
    assert_eq!(state.form.age, "");
}
