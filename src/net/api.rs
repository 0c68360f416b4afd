//! REST API helpers for the assistance-program server.
//!
//! Every endpoint goes through the [`Transport`] port. The browser build
//! plugs in [`HttpTransport`] (real HTTP via `gloo-net`); native builds get
//! a transport that reports [`ApiError::Unavailable`], and tests use an
//! in-memory recorder.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, ApiError>`; deciding how to surface a failure
//! (alert, inline message, silent log) is left to the calling service.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    DashboardData, Delivery, DeliveryForm, Family, FamilyForm, Kit, KitItem, KitItemUpsert, LoginRequest,
    LoginResponse, NewKit, NewSupplyItem, StockBalance, StockEntry, StockMovement, SupplyItem,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request as handed to the transport: method, path with query, JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be represented as JSON.
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method: Method::Post, path: path.into(), body: Some(body) })
    }
}

/// Raw response: status code and undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port over the HTTP client.
pub trait Transport: Clone + 'static {
    /// Send one request and return its raw response.
    ///
    /// Only transport-level failures are errors here; HTTP error statuses
    /// come back as a normal [`ApiResponse`].
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

// =============================================================
// Endpoint paths
// =============================================================

pub const FAMILY_CREATE_PATH: &str = "/cadastrar-familia";
pub const FAMILY_SEARCH_PATH: &str = "/buscar-familias";
pub const DELIVERY_CREATE_PATH: &str = "/registrar-entrega";
pub const DELIVERY_LIST_PATH: &str = "/listar-entregas";
pub const DASHBOARD_PATH: &str = "/dashboard-data";
pub const SUPPLY_ITEMS_PATH: &str = "/insumos";
pub const KITS_PATH: &str = "/kits";
pub const STOCK_ENTRY_PATH: &str = "/registrar-entrada-estoque";
pub const STOCK_BALANCE_PATH: &str = "/saldo-estoque";
pub const STOCK_MOVEMENTS_PATH: &str = "/movimentacoes-estoque";
pub const LOGIN_PATH: &str = "/api/login";
pub const LOGOUT_PATH: &str = "/api/logout";

/// `/buscar-familias`, with `?q=` only for a non-blank query.
pub fn family_search_path(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("{FAMILY_SEARCH_PATH}?q={}", encode_query_value(q)),
        None => FAMILY_SEARCH_PATH.to_owned(),
    }
}

/// Filters accepted by `/listar-entregas`. Blank values are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryFilter {
    pub start_date: String,
    pub end_date: String,
    pub family_id: String,
}

/// `/listar-entregas` with only the non-empty filters, never a bare `?`.
pub fn delivery_list_path(filter: &DeliveryFilter) -> String {
    let params = [
        ("dataInicio", filter.start_date.as_str()),
        ("dataFim", filter.end_date.as_str()),
        ("familia", filter.family_id.as_str()),
    ];
    let query = params
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| format!("{k}={}", encode_query_value(v.trim())))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        DELIVERY_LIST_PATH.to_owned()
    } else {
        format!("{DELIVERY_LIST_PATH}?{query}")
    }
}

pub fn kit_items_path(kit_id: i64) -> String {
    format!("{KITS_PATH}/{kit_id}/itens")
}

pub fn kit_item_path(item_id: i64) -> String {
    format!("{KITS_PATH}/itens/{item_id}")
}

/// Everything but RFC 3986 unreserved characters is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode a query value as UTF-8.
pub fn encode_query_value(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_VALUE).to_string()
}

// =============================================================
// Typed endpoint helpers
// =============================================================

async fn fetch_json<T: Transport, R: DeserializeOwned>(transport: &T, request: ApiRequest) -> Result<R, ApiError> {
    let response = transport.send(request).await?;
    if !response.ok() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_expect_ok<T: Transport>(transport: &T, request: ApiRequest) -> Result<(), ApiError> {
    let response = transport.send(request).await?;
    if !response.ok() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    Ok(())
}

/// `POST /cadastrar-familia`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn create_family<T: Transport>(transport: &T, form: &FamilyForm) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest::post(FAMILY_CREATE_PATH, form)?).await
}

/// `GET /buscar-familias[?q=]`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn search_families<T: Transport>(transport: &T, query: Option<&str>) -> Result<Vec<Family>, ApiError> {
    fetch_json(transport, ApiRequest::get(family_search_path(query))).await
}

/// `POST /registrar-entrega`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn create_delivery<T: Transport>(transport: &T, form: &DeliveryForm) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest::post(DELIVERY_CREATE_PATH, form)?).await
}

/// `GET /listar-entregas` with the non-empty filters.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn list_deliveries<T: Transport>(transport: &T, filter: &DeliveryFilter) -> Result<Vec<Delivery>, ApiError> {
    fetch_json(transport, ApiRequest::get(delivery_list_path(filter))).await
}

/// `GET /dashboard-data`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn fetch_dashboard<T: Transport>(transport: &T) -> Result<DashboardData, ApiError> {
    fetch_json(transport, ApiRequest::get(DASHBOARD_PATH)).await
}

/// `GET /insumos`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn list_supply_items<T: Transport>(transport: &T) -> Result<Vec<SupplyItem>, ApiError> {
    fetch_json(transport, ApiRequest::get(SUPPLY_ITEMS_PATH)).await
}

/// `POST /insumos`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn create_supply_item<T: Transport>(transport: &T, item: &NewSupplyItem) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest::post(SUPPLY_ITEMS_PATH, item)?).await
}

/// `GET /kits`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn list_kits<T: Transport>(transport: &T) -> Result<Vec<Kit>, ApiError> {
    fetch_json(transport, ApiRequest::get(KITS_PATH)).await
}

/// `POST /kits`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn create_kit<T: Transport>(transport: &T, kit: &NewKit) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest::post(KITS_PATH, kit)?).await
}

/// `GET /kits/{kit_id}/itens`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn list_kit_items<T: Transport>(transport: &T, kit_id: i64) -> Result<Vec<KitItem>, ApiError> {
    fetch_json(transport, ApiRequest::get(kit_items_path(kit_id))).await
}

/// `POST /kits/{kit_id}/itens`. The server treats a repeated
/// (kit, supply item) pair as an update.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn upsert_kit_item<T: Transport>(transport: &T, kit_id: i64, item: &KitItemUpsert) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest::post(kit_items_path(kit_id), item)?).await
}

/// `DELETE /kits/itens/{item_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn delete_kit_item<T: Transport>(transport: &T, item_id: i64) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest::delete(kit_item_path(item_id))).await
}

/// `POST /registrar-entrada-estoque`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn create_stock_entry<T: Transport>(transport: &T, entry: &StockEntry) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest::post(STOCK_ENTRY_PATH, entry)?).await
}

/// `GET /saldo-estoque`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn fetch_stock_balance<T: Transport>(transport: &T) -> Result<StockBalance, ApiError> {
    fetch_json(transport, ApiRequest::get(STOCK_BALANCE_PATH)).await
}

/// `GET /movimentacoes-estoque`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status or an
/// undecodable body.
pub async fn list_stock_movements<T: Transport>(transport: &T) -> Result<Vec<StockMovement>, ApiError> {
    fetch_json(transport, ApiRequest::get(STOCK_MOVEMENTS_PATH)).await
}

/// `POST /api/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status; the
/// server's `message` is carried in [`ApiError::Status`].
pub async fn login<T: Transport>(transport: &T, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    fetch_json(transport, ApiRequest::post(LOGIN_PATH, request)?).await
}

/// `POST /api/logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn logout<T: Transport>(transport: &T) -> Result<(), ApiError> {
    send_expect_ok(transport, ApiRequest { method: Method::Post, path: LOGOUT_PATH.to_owned(), body: None }).await
}

// =============================================================
// HTTP adapter
// =============================================================

/// Browser HTTP transport. Paths are joined onto `base_url`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url_for(&request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Delete => Request::delete(&url),
            }
            .credentials(web_sys::RequestCredentials::Include);
            let response = match request.body {
                Some(body) => builder
                    .json(&body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
