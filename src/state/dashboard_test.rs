use super::*;

#[test]
fn default_counters_show_zero() {
    let state = DashboardState::default();
    assert_eq!(state.counters.total_families, "0");
    assert!(state.recent_rows.is_empty());
}

#[test]
fn apply_writes_counters_and_rows() {
    let data = DashboardData {
        total_familias: 12,
        cestas_mes: 5,
        total_pessoas: 41,
        cestas_estoque: 30,
        ultimas_entregas: vec![RecentDelivery {
            date: "02/03/2025".to_owned(),
            family: "Família 4".to_owned(),
            responsible: "Beneficiário".to_owned(),
            quantity: 1,
        }],
    };
    let mut state = DashboardState::default();
    state.apply(&data);

    assert_eq!(state.counters.total_families, "12");
    assert_eq!(state.counters.baskets_this_month, "5");
    assert_eq!(state.counters.total_people, "41");
    assert_eq!(state.counters.baskets_in_stock, "30");
    assert_eq!(state.recent_rows.len(), 1);
    assert_eq!(state.recent_rows[0].texts(), vec!["02/03/2025", "Família 4", "Beneficiário", "1"]);
}

#[test]
fn apply_replaces_previous_rows() {
    let mut state = DashboardState::default();
    state.recent_rows = vec![TableRow::message("stale", 4)];
    state.apply(&DashboardData::default());
    assert!(state.recent_rows.is_empty());
}
