//! Login, logout and the idle-session notice.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::logging::{log, warn};

use super::{Controller, inline_failure_message};
use crate::net::api::{self, Transport};
use crate::net::types::LoginRequest;
use crate::state::session::{IdleTick, SessionMonitor, SessionNotice};
use crate::util::browser::Browser;
use crate::util::forms::{ValidationError, non_blank};
use crate::util::store::{StoreKind, ViewStore};

pub const LOGIN_REDIRECT: &str = "/app";
pub const LOGOUT_REDIRECT: &str = "/";
pub const LOGIN_FAILED_FALLBACK: &str = "Usuário ou senha inválidos.";

impl<K: StoreKind, T: Transport, B: Browser> Controller<K, T, B> {
    /// Close the server session, best effort, then leave for the login page
    /// whatever the outcome.
    pub async fn logout(&self) {
        if let Err(e) = api::logout(&self.transport).await {
            warn!("logout request failed: {e}");
        }
        self.browser.redirect(LOGOUT_REDIRECT);
    }

    /// Open a session and enter the workspace.
    ///
    /// # Errors
    ///
    /// Returns the message to show inline: a validation message, the
    /// server's `message`, or a connectivity notice.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), String> {
        let (Some(username), Some(password)) = (non_blank(username), non_blank(password)) else {
            return Err(ValidationError::CredentialsRequired.to_string());
        };

        let request = LoginRequest { username, password };
        match api::login(&self.transport, &request).await {
            Ok(_) => {
                log!("signed in as {}", request.username);
                self.browser.redirect(LOGIN_REDIRECT);
                Ok(())
            }
            Err(e) => {
                warn!("login failed: {e}");
                Err(inline_failure_message(LOGIN_FAILED_FALLBACK, &e))
            }
        }
    }

    /// Update the countdown toast from the monitor. Shows it only inside
    /// the warning window; hides it otherwise.
    pub fn refresh_idle_notice(&self, monitor: &SessionMonitor, now_ms: f64) -> IdleTick {
        let tick = monitor.tick(now_ms);
        let notice = match tick {
            IdleTick::Warning { remaining_secs } => Some(SessionNotice::Countdown { remaining_secs }),
            IdleTick::Expired => Some(SessionNotice::Expired),
            IdleTick::Stopped | IdleTick::Active => None,
        };
        if !monitor.is_expired() {
            self.stores.session.write(|s| s.notice = notice);
        }
        tick
    }

    pub fn show_expiry_notice(&self) {
        self.stores.session.write(|s| s.notice = Some(SessionNotice::Expired));
    }

    /// Countdown timer fired. Returns `true` when this tick expired the
    /// session and the caller must schedule the logout.
    pub fn on_idle_tick(&self, monitor: &mut SessionMonitor, now_ms: f64) -> bool {
        match self.refresh_idle_notice(monitor, now_ms) {
            IdleTick::Expired => self.on_idle_deadline(monitor),
            IdleTick::Stopped | IdleTick::Active | IdleTick::Warning { .. } => false,
        }
    }

    /// Deadline timer fired. Returns `true` only for the first call per
    /// armed deadline, whichever timer gets there first.
    pub fn on_idle_deadline(&self, monitor: &mut SessionMonitor) -> bool {
        if !monitor.expire() {
            return false;
        }
        warn!("session idle deadline reached, signing out");
        self.show_expiry_notice();
        true
    }

    /// Leave the expiry notice up until `delay` resolves, then log out.
    pub async fn end_idle_session(&self, delay: impl Future<Output = ()>) {
        delay.await;
        self.logout().await;
    }
}
