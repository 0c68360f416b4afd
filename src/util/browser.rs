//! Browser port: blocking notices, confirmation, navigation and clock.
//!
//! SYSTEM CONTEXT
//! ==============
//! The services surface request failures with blocking alerts and ask for
//! confirmation before destructive actions. Routing those calls through a
//! trait keeps the services runnable natively; `WebBrowser` is the real
//! adapter and only talks to `web-sys` in the `csr` build.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use time::{Date, Month};

pub trait Browser: Clone + 'static {
    /// Show a blocking notice.
    fn alert(&self, message: &str);
    /// Ask a yes/no question. Returns `false` when the user declines.
    fn confirm(&self, message: &str) -> bool;
    /// Leave the current page for `path`.
    fn redirect(&self, path: &str);
    /// Current calendar date in the user's local time zone.
    fn today(&self) -> Date;
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;
}

/// Adapter over `window`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("alert: {message}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }

    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("redirect: {path}");
        }
    }

    fn today(&self) -> Date {
        #[cfg(feature = "csr")]
        {
            let now = js_sys::Date::new_0();
            local_date(now.get_full_year(), now.get_month(), now.get_date())
                .unwrap_or_else(|| time::OffsetDateTime::now_utc().date())
        }
        #[cfg(not(feature = "csr"))]
        {
            time::OffsetDateTime::now_utc().date()
        }
    }

    fn now_ms(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "csr"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs_f64() * 1000.0)
                .unwrap_or(0.0)
        }
    }
}

/// Build a date from JS `Date` parts (zero-based month).
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn local_date(year: u32, zero_based_month: u32, day: u32) -> Option<Date> {
    let year = i32::try_from(year).ok()?;
    let month = Month::try_from(u8::try_from(zero_based_month + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}
