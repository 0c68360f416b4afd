//! In-memory adapters for the transport, browser and store ports.
//!
//! Test-only. Services run natively against these, driven by
//! `futures::executor::block_on`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use time::Date;
use time::macros::date;

use crate::net::api::{ApiRequest, ApiResponse, Method, Transport};
use crate::net::error::ApiError;
use crate::services::Controller;
use crate::state::AppStores;
use crate::util::browser::Browser;
use crate::util::store::{StoreKind, ViewStore};

// =============================================================
// Transport
// =============================================================

type Reply = Result<ApiResponse, ApiError>;

type SendHook = Rc<dyn Fn(&ApiRequest)>;

#[derive(Default)]
struct TransportLog {
    replies: HashMap<(Method, String), VecDeque<Reply>>,
    requests: Vec<ApiRequest>,
    hook: Option<SendHook>,
}

/// Scripted transport. Replies are queued per `(method, path)`; the last
/// queued reply repeats. Unscripted requests get a 404.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    log: Rc<RefCell<TransportLog>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.push(method, path, Err(error));
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.log.borrow_mut().replies.entry((method, path.to_owned())).or_default().push_back(reply);
    }

    /// Run `hook` while each request is "in flight", before its reply.
    pub fn on_send(&self, hook: impl Fn(&ApiRequest) + 'static) {
        self.log.borrow_mut().hook = Some(Rc::new(hook));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.borrow().requests.clone()
    }

    /// Paths of every request sent with `method`, in order.
    pub fn paths(&self, method: Method) -> Vec<String> {
        self.log.borrow().requests.iter().filter(|r| r.method == method).map(|r| r.path.clone()).collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.log.borrow().requests.iter().filter(|r| r.method == method && r.path == path).count()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let hook = self.log.borrow().hook.clone();
        if let Some(hook) = hook {
            hook(&request);
        }
        let mut log = self.log.borrow_mut();
        log.requests.push(request.clone());
        let key = (request.method, request.path);
        match log.replies.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Err(ApiError::Unavailable)),
            Some(queue) => queue.front().cloned().unwrap_or(Err(ApiError::Unavailable)),
            None => Ok(ApiResponse { status: 404, body: r#"{"error":"not found"}"#.to_owned() }),
        }
    }
}

// =============================================================
// Browser
// =============================================================

#[derive(Default)]
struct BrowserLog {
    alerts: Vec<String>,
    confirms: Vec<String>,
    redirects: Vec<String>,
}

/// Records notices and navigation; `confirm` answers with a scripted value.
#[derive(Clone)]
pub struct FakeBrowser {
    log: Rc<RefCell<BrowserLog>>,
    confirm_answer: Rc<Cell<bool>>,
    now_ms: Rc<Cell<f64>>,
    today: Date,
}

impl Default for FakeBrowser {
    fn default() -> Self {
        Self {
            log: Rc::default(),
            confirm_answer: Rc::new(Cell::new(true)),
            now_ms: Rc::new(Cell::new(1_000_000.0)),
            today: date!(2025 - 03 - 10),
        }
    }
}

impl FakeBrowser {
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn set_now(&self, now_ms: f64) {
        self.now_ms.set(now_ms);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.log.borrow().alerts.clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.log.borrow().confirms.clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.log.borrow().redirects.clone()
    }
}

impl Browser for FakeBrowser {
    fn alert(&self, message: &str) {
        self.log.borrow_mut().alerts.push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.log.borrow_mut().confirms.push(message.to_owned());
        self.confirm_answer.get()
    }

    fn redirect(&self, path: &str) {
        self.log.borrow_mut().redirects.push(path.to_owned());
    }

    fn today(&self) -> Date {
        self.today
    }

    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

// =============================================================
// Store
// =============================================================

/// Plain shared cell standing in for a signal.
pub struct LocalCell<T>(Rc<RefCell<T>>);

impl<T> Clone for LocalCell<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: 'static> ViewStore<T> for LocalCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.0.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.0.borrow_mut()))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl StoreKind for LocalStore {
    type Store<T: Send + Sync + 'static> = LocalCell<T>;

    fn store<T: Send + Sync + 'static>(value: T) -> LocalCell<T> {
        LocalCell(Rc::new(RefCell::new(value)))
    }
}

// =============================================================
// Harness
// =============================================================

pub type TestController = Controller<LocalStore, RecordingTransport, FakeBrowser>;

/// Controller wired to fresh fakes; returns handles to the fakes as well.
pub fn harness() -> (TestController, RecordingTransport, FakeBrowser) {
    let transport = RecordingTransport::new();
    let browser = FakeBrowser::default();
    let stores = AppStores::<LocalStore>::new(browser.today());
    let controller = Controller::new(stores, transport.clone(), browser.clone());
    (controller, transport, browser)
}
