use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::testing::harness;
use crate::util::forms::ValidationError;

#[test]
fn movements_render_ledger_rows() {
    let (controller, transport, _) = harness();
    transport.respond(
        Method::Get,
        "/movimentacoes-estoque",
        200,
        r#"[{"data_movimentacao": "01/03/2025", "quantidade_entrada": 10, "quantidade_saida": 0,
             "motivo_saida": null, "responsavel": "Maria"}]"#,
    );

    block_on(controller.load_stock_movements());

    let rows = controller.stores.stock.read(|s| s.movement_rows.clone()).unwrap_or_default();
    assert_eq!(rows[0].texts(), vec!["01/03/2025", "10", "0", "—", "Maria"]);
}

#[test]
fn balance_failure_is_alerted() {
    let (controller, transport, browser) = harness();
    transport.respond(Method::Get, "/saldo-estoque", 500, "");

    block_on(controller.load_stock_balance());

    assert_eq!(browser.alerts(), vec![STOCK_BALANCE_FAILED]);
    assert_eq!(controller.stores.stock.read(|s| s.balance), Some(None));
}

#[test]
fn entry_rejects_non_positive_or_fractional_counts() {
    for quantity in ["0", "-3", "2.5", "dez", ""] {
        let (controller, transport, _) = harness();
        controller.stores.stock.write(|s| s.form.quantity = quantity.to_owned());

        block_on(controller.submit_stock_entry());

        assert!(transport.requests().is_empty(), "quantity {quantity:?} was sent");
        assert_eq!(
            controller.stores.stock.read(|s| s.message.clone()),
            Some(Some(ValidationError::InvalidStockQuantity.to_string()))
        );
    }
}

#[test]
fn entry_success_clears_form_and_reloads_balance_and_ledger() {
    let (controller, transport, browser) = harness();
    transport.respond(Method::Post, "/registrar-entrada-estoque", 201, "{}");
    transport.respond(Method::Get, "/saldo-estoque", 200, r#"{"cestasEstoque": 25}"#);
    transport.respond(Method::Get, "/movimentacoes-estoque", 200, "[]");
    controller.stores.stock.write(|s| {
        s.form.quantity = "20".to_owned();
        s.form.supplier = "Banco de Alimentos".to_owned();
    });

    block_on(controller.submit_stock_entry());

    assert_eq!(
        transport.requests()[0].body,
        Some(serde_json::json!({"quantidade": 20, "fornecedor": "Banco de Alimentos", "observacoes": null}))
    );
    assert_eq!(browser.alerts(), vec![STOCK_ENTRY_SAVED_MESSAGE]);
    assert_eq!(controller.stores.stock.read(|s| s.form.clone()), Some(StockForm::default()));
    assert_eq!(controller.stores.stock.read(|s| s.balance), Some(Some(25)));
    assert_eq!(transport.count(Method::Get, "/movimentacoes-estoque"), 1);
}

#[test]
fn entry_failure_keeps_form() {
    let (controller, transport, browser) = harness();
    transport.respond(Method::Post, "/registrar-entrada-estoque", 400, r#"{"error":"Quantidade inválida"}"#);
    controller.stores.stock.write(|s| s.form.quantity = "5".to_owned());

    block_on(controller.submit_stock_entry());

    assert_eq!(browser.alerts(), vec!["Erro: Quantidade inválida"]);
    assert_eq!(controller.stores.stock.read(|s| s.form.quantity.clone()).as_deref(), Some("5"));
    assert_eq!(controller.stores.stock.read(|s| s.submitting), Some(false));
}
