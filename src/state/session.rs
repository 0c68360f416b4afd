//! Idle-session monitor and the notice it drives.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionMonitor` is the pure state machine: a single deadline that user
//! activity pushes forward. The browser driver in
//! `components::session_guard` owns the timers and feeds the monitor the
//! current time; `SessionState` is what the toast renders.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::IdleTimings;

/// Result of checking the monitor against the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleTick {
    /// Not started, stopped, or already expired.
    Stopped,
    /// Plenty of time left; no notice.
    Active,
    /// Inside the warning window, with whole seconds remaining (rounded up).
    Warning { remaining_secs: u64 },
    /// The deadline has passed.
    Expired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionMonitor {
    timings: IdleTimings,
    deadline_ms: Option<f64>,
    expired: bool,
}

impl SessionMonitor {
    pub fn new(timings: IdleTimings) -> Self {
        Self { timings, deadline_ms: None, expired: false }
    }

    pub fn timings(&self) -> IdleTimings {
        self.timings
    }

    /// Arm the monitor with a fresh deadline.
    pub fn start(&mut self, now_ms: f64) -> f64 {
        self.expired = false;
        let deadline = now_ms + duration_ms(self.timings.timeout);
        self.deadline_ms = Some(deadline);
        deadline
    }

    /// Disarm the monitor; ticks report `Stopped` until the next `start`.
    pub fn stop(&mut self) {
        self.deadline_ms = None;
    }

    /// Push the deadline to `now + timeout`. Activity after expiry is
    /// ignored, because the logout is already under way.
    pub fn record_activity(&mut self, now_ms: f64) -> Option<f64> {
        if self.expired {
            return None;
        }
        Some(self.start(now_ms))
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn tick(&self, now_ms: f64) -> IdleTick {
        let Some(deadline) = self.deadline_ms else {
            return IdleTick::Stopped;
        };
        if self.expired {
            return IdleTick::Stopped;
        }
        let remaining = deadline - now_ms;
        if remaining <= 0.0 {
            IdleTick::Expired
        } else if remaining <= duration_ms(self.timings.warning) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let remaining_secs = (remaining / 1000.0).ceil() as u64;
            IdleTick::Warning { remaining_secs }
        } else {
            IdleTick::Active
        }
    }

    /// Mark the current deadline as expired. Returns `true` only for the
    /// first call per armed deadline, so the logout runs once.
    pub fn expire(&mut self) -> bool {
        if self.deadline_ms.is_none() || self.expired {
            return false;
        }
        self.expired = true;
        true
    }
}

#[allow(clippy::cast_precision_loss)]
fn duration_ms(duration: std::time::Duration) -> f64 {
    duration.as_millis() as f64
}

/// `m:ss` countdown text.
pub fn format_countdown(remaining_secs: u64) -> String {
    format!("{}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionNotice {
    Countdown { remaining_secs: u64 },
    Expired,
}

impl SessionNotice {
    pub fn message(&self) -> String {
        match self {
            Self::Countdown { remaining_secs } => {
                format!("Sua sessão expira em {} por inatividade.", format_countdown(*remaining_secs))
            }
            Self::Expired => "Sessão expirada por inatividade. Saindo...".to_owned(),
        }
    }
}

/// What the session toast shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub notice: Option<SessionNotice>,
}
