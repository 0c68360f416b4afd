//! Idle-session toast and the browser timers behind it.
//!
//! The guard arms a `SessionMonitor` when the workspace mounts. Any user
//! activity on the document pushes the deadline forward; a one-second
//! interval refreshes the countdown toast, and the deadline timer shows the
//! expiry notice and logs out after a short delay.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::services::WebController;
use crate::state::session::SessionNotice;

#[component]
pub fn SessionGuard() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let config = expect_context::<ClientConfig>();
    let session = controller.stores.session;

    #[cfg(feature = "csr")]
    idle::install(controller, config.idle);
    #[cfg(not(feature = "csr"))]
    let _ = (controller, config);

    view! {
        <Show when=move || session.with(|s| s.notice.is_some())>
            <div class="session-toast" role="alert">
                {move || session.with(|s| s.notice.as_ref().map(SessionNotice::message))}
            </div>
        </Show>
    }
}

#[cfg(feature = "csr")]
mod idle {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::{Interval, Timeout};
    use leptos::logging::{log, warn};
    use leptos::task::spawn_local;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::config::{COUNTDOWN_TICK_MS, IdleTimings};
    use crate::services::WebController;
    use crate::state::session::SessionMonitor;
    use crate::util::browser::Browser;

    const ACTIVITY_EVENTS: [&str; 6] = ["mousemove", "mousedown", "keypress", "scroll", "touchstart", "click"];

    thread_local! {
        static INSTALLED: Cell<bool> = const { Cell::new(false) };
    }

    struct Driver {
        controller: WebController,
        monitor: SessionMonitor,
        logout_timer: Option<Timeout>,
        countdown: Option<Interval>,
    }

    type SharedDriver = Rc<RefCell<Driver>>;

    /// Arm the monitor and attach the activity listeners. Runs once per page.
    pub(super) fn install(controller: WebController, timings: IdleTimings) {
        if INSTALLED.with(|flag| flag.replace(true)) {
            return;
        }
        let driver = Rc::new(RefCell::new(Driver {
            controller,
            monitor: SessionMonitor::new(timings),
            logout_timer: None,
            countdown: None,
        }));
        rearm(&driver);
        listen(&driver);
        log!("idle session monitor armed: timeout {:?}, warning {:?}", timings.timeout, timings.warning);
    }

    /// Push the deadline forward and replace both timers.
    fn rearm(driver: &SharedDriver) {
        let mut d = driver.borrow_mut();
        let now = d.controller.browser.now_ms();
        let Some(deadline) = d.monitor.record_activity(now) else {
            return;
        };
        d.logout_timer = None;
        d.countdown = None;
        d.controller.refresh_idle_notice(&d.monitor, now);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let remaining_ms = (deadline - now).max(0.0) as u32;
        let weak = Rc::downgrade(driver);
        d.logout_timer = Some(Timeout::new(remaining_ms, move || on_deadline(&weak)));
        let weak = Rc::downgrade(driver);
        d.countdown = Some(Interval::new(COUNTDOWN_TICK_MS, move || on_tick(&weak)));
    }

    fn on_tick(weak: &Weak<RefCell<Driver>>) {
        let Some(driver) = weak.upgrade() else {
            return;
        };
        let mut guard = driver.borrow_mut();
        let d = &mut *guard;
        let now = d.controller.browser.now_ms();
        if d.controller.on_idle_tick(&mut d.monitor, now) {
            schedule_logout(d);
        }
    }

    /// Called from inside timer callbacks, so the timers are left in place.
    fn on_deadline(weak: &Weak<RefCell<Driver>>) {
        let Some(driver) = weak.upgrade() else {
            return;
        };
        let mut guard = driver.borrow_mut();
        let d = &mut *guard;
        if d.controller.on_idle_deadline(&mut d.monitor) {
            schedule_logout(d);
        }
    }

    fn schedule_logout(d: &Driver) {
        let controller = d.controller.clone();
        let delay = d.monitor.timings().logout_delay;
        spawn_local(async move { controller.end_idle_session(gloo_timers::future::sleep(delay)).await });
    }

    fn listen(driver: &SharedDriver) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            warn!("no document; idle activity is not tracked");
            return;
        };
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);

        for event in ACTIVITY_EVENTS {
            let driver = Rc::clone(driver);
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| rearm(&driver));
            if document
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .is_err()
            {
                warn!("failed to listen for {event}");
            }
            callback.forget();
        }
    }
}
