use futures::executor::block_on;

use crate::net::api::Method;
use crate::state::nav::Section;
use crate::testing::harness;
use crate::util::store::ViewStore;

#[test]
fn activating_registration_loads_nothing() {
    let (controller, transport, _) = harness();
    block_on(controller.activate_section(Section::FamilyRegistration));

    assert_eq!(controller.stores.nav.read(|n| n.active), Some(Section::FamilyRegistration));
    assert!(transport.requests().is_empty());
}

#[test]
fn history_loads_family_filter_and_unfiltered_deliveries() {
    let (controller, transport, browser) = harness();
    transport.respond(Method::Get, "/buscar-familias", 200, "[]");
    transport.respond(Method::Get, "/listar-entregas", 200, "[]");

    block_on(controller.activate_section(Section::History));

    let mut paths = transport.paths(Method::Get);
    paths.sort();
    assert_eq!(paths, vec!["/buscar-familias", "/listar-entregas"]);
    assert!(browser.alerts().is_empty());
}

#[test]
fn kits_section_loads_supplies_and_kits() {
    let (controller, transport, _) = harness();
    transport.respond(Method::Get, "/insumos", 200, "[]");
    transport.respond(Method::Get, "/kits", 200, "[]");

    block_on(controller.activate_section(Section::Kits));

    assert_eq!(transport.count(Method::Get, "/insumos"), 1);
    assert_eq!(transport.count(Method::Get, "/kits"), 1);
}

#[test]
fn stock_section_loads_balance_and_ledger() {
    let (controller, transport, _) = harness();
    transport.respond(Method::Get, "/saldo-estoque", 200, r#"{"cestasEstoque": 14}"#);
    transport.respond(Method::Get, "/movimentacoes-estoque", 200, "[]");

    block_on(controller.activate_section(Section::Stock));

    assert_eq!(controller.stores.stock.read(|s| s.balance), Some(Some(14)));
}

#[test]
fn loader_failure_is_alerted_but_section_still_switches() {
    let (controller, transport, browser) = harness();
    transport.respond(Method::Get, "/dashboard-data", 500, r#"{"error":"boom"}"#);

    block_on(controller.activate_section(Section::Dashboard));

    assert_eq!(controller.stores.nav.read(|n| n.active), Some(Section::Dashboard));
    assert_eq!(browser.alerts(), vec!["Erro ao carregar dados do dashboard."]);
}
