use super::*;
use crate::testing::RecordingTransport;
use futures::executor::block_on;

// =============================================================
// Path builders
// =============================================================

#[test]
fn family_search_path_omits_blank_query() {
    assert_eq!(family_search_path(None), "/buscar-familias");
    assert_eq!(family_search_path(Some("   ")), "/buscar-familias");
}

#[test]
fn family_search_path_encodes_query() {
    assert_eq!(family_search_path(Some(" João Silva ")), "/buscar-familias?q=Jo%C3%A3o%20Silva");
    assert_eq!(family_search_path(Some("a&b=c")), "/buscar-familias?q=a%26b%3Dc");
}

#[test]
fn query_values_encode_multibyte_utf8() {
    assert_eq!(encode_query_value("José"), "Jos%C3%A9");
    assert_eq!(encode_query_value("Conceição"), "Concei%C3%A7%C3%A3o");
    assert_eq!(encode_query_value("a-b_c.d~e"), "a-b_c.d~e");
    assert_eq!(encode_query_value("1/2+3"), "1%2F2%2B3");
}

#[test]
fn delivery_list_path_without_filters_has_no_query_string() {
    assert_eq!(delivery_list_path(&DeliveryFilter::default()), "/listar-entregas");
}

#[test]
fn delivery_list_path_includes_only_non_empty_filters() {
    let filter = DeliveryFilter { start_date: "2025-01-01".to_owned(), end_date: String::new(), family_id: "7".to_owned() };
    assert_eq!(delivery_list_path(&filter), "/listar-entregas?dataInicio=2025-01-01&familia=7");

    let only_end = DeliveryFilter { end_date: "2025-02-28".to_owned(), ..DeliveryFilter::default() };
    assert_eq!(delivery_list_path(&only_end), "/listar-entregas?dataFim=2025-02-28");
}

#[test]
fn delivery_list_path_keeps_parameter_order() {
    let filter = DeliveryFilter {
        start_date: "2025-01-01".to_owned(),
        end_date: "2025-01-31".to_owned(),
        family_id: "3".to_owned(),
    };
    assert_eq!(delivery_list_path(&filter), "/listar-entregas?dataInicio=2025-01-01&dataFim=2025-01-31&familia=3");
}

#[test]
fn kit_paths_format_ids() {
    assert_eq!(kit_items_path(4), "/kits/4/itens");
    assert_eq!(kit_item_path(11), "/kits/itens/11");
}

#[test]
fn http_transport_joins_base_url() {
    assert_eq!(HttpTransport::new("https://api.example.org").url_for("/insumos"), "https://api.example.org/insumos");
    assert_eq!(HttpTransport::default().url_for("/insumos"), "/insumos");
}

// =============================================================
// Response handling
// =============================================================

#[test]
fn api_response_ok_covers_2xx_only() {
    assert!(ApiResponse { status: 200, body: String::new() }.ok());
    assert!(ApiResponse { status: 201, body: String::new() }.ok());
    assert!(!ApiResponse { status: 302, body: String::new() }.ok());
    assert!(!ApiResponse { status: 500, body: String::new() }.ok());
}

#[test]
fn error_status_carries_server_message() {
    let transport = RecordingTransport::new();
    transport.respond(Method::Post, "/cadastrar-familia", 400, r#"{"error":"Campo obrigatório: responsavelCPF"}"#);

    let err = block_on(create_family(&transport, &crate::net::types::FamilyForm::default())).unwrap_err();
    assert_eq!(err.server_message(), Some("Campo obrigatório: responsavelCPF"));
}

#[test]
fn error_status_without_json_body_has_no_message() {
    let transport = RecordingTransport::new();
    transport.respond(Method::Get, "/dashboard-data", 502, "<html>Bad gateway</html>");

    let err = block_on(fetch_dashboard(&transport)).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[test]
fn malformed_success_body_is_decode_error() {
    let transport = RecordingTransport::new();
    transport.respond(Method::Get, "/insumos", 200, "not json");

    let err = block_on(list_supply_items(&transport)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn upsert_kit_item_posts_expected_body() {
    let transport = RecordingTransport::new();
    transport.respond(Method::Post, "/kits/2/itens", 201, r#"{"message":"Item adicionado/atualizado no kit!"}"#);

    block_on(upsert_kit_item(&transport, 2, &KitItemUpsert { insumo_id: 9, quantity: 3.0 })).unwrap();

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(serde_json::json!({"insumo_id": 9, "quantidade": 3})));
}

#[test]
fn logout_posts_without_body() {
    let transport = RecordingTransport::new();
    transport.respond(Method::Post, "/api/logout", 200, "{}");

    block_on(logout(&transport)).unwrap();
    assert_eq!(transport.requests(), vec![ApiRequest { method: Method::Post, path: "/api/logout".to_owned(), body: None }]);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_http_transport_is_unavailable() {
    let err = block_on(HttpTransport::default().send(ApiRequest::get("/insumos"))).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
    assert!(err.is_network());
}
