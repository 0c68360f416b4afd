use super::*;
use time::macros::date;

fn delivery(id: Option<i64>, family: &str) -> Delivery {
    Delivery {
        id,
        date: "10/02/2025".to_owned(),
        family_name: family.to_owned(),
        responsible: "Joana".to_owned(),
        quantity: 2,
        delivered_by: "Pedro".to_owned(),
    }
}

#[test]
fn new_state_defaults_date_to_today() {
    let state = DeliveriesState::new(date!(2025 - 02 - 10));
    assert_eq!(state.form.date, "2025-02-10");
    assert_eq!(state.form.family_id, "");
}

#[test]
fn reset_form_clears_fields_but_keeps_today() {
    let mut state = DeliveriesState::new(date!(2025 - 02 - 10));
    state.form.family_id = "4".to_owned();
    state.form.quantity = "2".to_owned();
    state.form.date = "2024-12-24".to_owned();

    state.reset_form(date!(2025 - 02 - 11));
    assert_eq!(state.form, DeliveryForm { date: "2025-02-11".to_owned(), ..DeliveryForm::default() });
}

#[test]
fn empty_history_renders_no_rows() {
    assert!(delivery_rows(&[]).is_empty());
}

#[test]
fn history_rows_have_five_columns() {
    let rows = delivery_rows(&[delivery(Some(8), "Família 1"), delivery(None, "Família 2")]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].texts(), vec!["10/02/2025", "Família 1", "Joana", "2", "Pedro"]);
    assert_eq!(rows[0].key, "8");
    assert_eq!(rows[1].key, "row-1");
}
