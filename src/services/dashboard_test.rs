use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::net::error::ApiError;
use crate::testing::harness;

#[test]
fn load_writes_counters_and_recent_rows() {
    let (controller, transport, browser) = harness();
    transport.respond(
        Method::Get,
        "/dashboard-data",
        200,
        r#"{"totalFamilias": 10, "cestasMes": "4", "totalPessoas": 37, "cestasEstoque": 12,
            "ultimasEntregas": [{"data": "09/03/2025", "familia": "Ana", "responsavel": "Ana", "quantidade": 2}]}"#,
    );

    block_on(controller.load_dashboard());

    let state = controller.stores.dashboard.read(Clone::clone).unwrap_or_default();
    assert_eq!(state.counters.total_families, "10");
    assert_eq!(state.counters.baskets_this_month, "4");
    assert_eq!(state.recent_rows[0].texts(), vec!["09/03/2025", "Ana", "Ana", "2"]);
    assert!(browser.alerts().is_empty());
}

#[test]
fn missing_recent_deliveries_is_an_empty_table() {
    let (controller, transport, browser) = harness();
    transport.respond(Method::Get, "/dashboard-data", 200, r#"{"totalFamilias": 1}"#);

    block_on(controller.load_dashboard());

    assert_eq!(controller.stores.dashboard.read(|s| s.recent_rows.len()), Some(0));
    assert!(browser.alerts().is_empty());
}

#[test]
fn null_recent_deliveries_still_writes_counters() {
    let (controller, transport, browser) = harness();
    transport.respond(
        Method::Get,
        "/dashboard-data",
        200,
        r#"{"totalFamilias": 3, "cestasMes": 1, "totalPessoas": 9, "cestasEstoque": 4, "ultimasEntregas": null}"#,
    );

    block_on(controller.load_dashboard());

    let state = controller.stores.dashboard.read(Clone::clone).unwrap_or_default();
    assert_eq!(state.counters.total_families, "3");
    assert_eq!(state.counters.baskets_in_stock, "4");
    assert!(state.recent_rows.is_empty());
    assert!(browser.alerts().is_empty());
}

#[test]
fn network_failure_is_alerted() {
    let (controller, transport, browser) = harness();
    transport.fail(Method::Get, "/dashboard-data", ApiError::Network("offline".to_owned()));

    block_on(controller.load_dashboard());
    assert_eq!(browser.alerts(), vec![DASHBOARD_FAILED]);
}

#[test]
fn malformed_body_is_alerted() {
    let (controller, transport, browser) = harness();
    transport.respond(Method::Get, "/dashboard-data", 200, "<html>");

    block_on(controller.load_dashboard());
    assert_eq!(browser.alerts(), vec![DASHBOARD_FAILED]);
}
