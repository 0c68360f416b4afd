//! Client operations: fetch, map, store, report.
//!
//! ARCHITECTURE
//! ============
//! Every operation lives on [`Controller`], which bundles the page stores
//! with the transport and browser ports. Operations are `async` and are
//! spawned by components; none of them return errors. Failures are logged
//! and surfaced here, at the call site, with a blocking notice or an
//! inline message.

pub mod dashboard;
pub mod deliveries;
pub mod families;
pub mod router;
pub mod session;
pub mod stock;
pub mod supplies;

use leptos::logging::error;

use crate::config::ClientConfig;
use crate::net::api::{HttpTransport, Transport};
use crate::net::error::ApiError;
use crate::state::AppStores;
use crate::util::browser::{Browser, WebBrowser};
use crate::util::store::{Signals, StoreKind};

pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão com o servidor.";

/// Page stores plus the ports the operations talk through.
#[derive(Clone)]
pub struct Controller<K: StoreKind, T: Transport, B: Browser> {
    pub stores: AppStores<K>,
    pub transport: T,
    pub browser: B,
}

/// The browser build: signal stores, HTTP, `window`.
pub type WebController = Controller<Signals, HttpTransport, WebBrowser>;

impl WebController {
    /// Build the browser controller. Creates signals, so call it inside the
    /// app's reactive owner.
    pub fn from_config(config: &ClientConfig) -> Self {
        let browser = WebBrowser;
        Self::new(AppStores::new(browser.today()), HttpTransport::new(config.api_base.clone()), browser)
    }
}

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    pub fn new(stores: AppStores<K>, transport: T, browser: B) -> Self {
        Self { stores, transport, browser }
    }

    /// A loader failed: log the cause, tell the user with a fixed notice.
    pub(crate) fn report_load_failure(&self, what: &str, notice: &str, err: &ApiError) {
        error!("{what} failed: {err}");
        self.browser.alert(notice);
    }

    /// A create request failed: connectivity notice for transport errors,
    /// otherwise the server's message or `fallback`.
    pub(crate) fn report_submit_failure(&self, what: &str, fallback: &str, err: &ApiError) {
        error!("{what} failed: {err}");
        self.browser.alert(&submit_failure_notice(fallback, err));
    }
}

/// Notice shown when a create request fails.
pub fn submit_failure_notice(fallback: &str, err: &ApiError) -> String {
    if err.is_network() {
        CONNECTION_ERROR_MESSAGE.to_owned()
    } else {
        format!("Erro: {}", err.server_message().unwrap_or(fallback))
    }
}

/// Inline text for a failure inside a section with its own message slot.
pub fn inline_failure_message(fallback: &str, err: &ApiError) -> String {
    if err.is_network() { CONNECTION_ERROR_MESSAGE.to_owned() } else { err.server_message().unwrap_or(fallback).to_owned() }
}
