//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so overrides are captured
//! with `option_env!` when the crate is compiled. Parsing goes through a
//! lookup function so it can be exercised natively in tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 15 * 60;
pub const DEFAULT_IDLE_WARNING_SECS: u64 = 60;
pub const DEFAULT_LOGOUT_DELAY_MS: u64 = 2_000;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Idle-session timings used by the session monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimings {
    /// Inactivity period after which the session is closed.
    pub timeout: Duration,
    /// Remaining-time window in which the countdown toast is shown.
    pub warning: Duration,
    /// Pause between the expiry notice and the logout redirect.
    pub logout_delay: Duration,
}

impl Default for IdleTimings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            warning: Duration::from_secs(DEFAULT_IDLE_WARNING_SECS),
            logout_delay: Duration::from_millis(DEFAULT_LOGOUT_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every API path. Empty means same origin.
    pub api_base: String,
    pub idle: IdleTimings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), idle: IdleTimings::default() }
    }
}

impl ClientConfig {
    /// Build the config from values captured at compile time.
    ///
    /// Optional:
    /// - `CESTAS_API_BASE`: API origin/prefix, default same origin
    /// - `CESTAS_IDLE_TIMEOUT_SECS`: default 900
    /// - `CESTAS_IDLE_WARNING_SECS`: default 60
    /// - `CESTAS_LOGOUT_DELAY_MS`: default 2000
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "CESTAS_API_BASE" => option_env!("CESTAS_API_BASE"),
            "CESTAS_IDLE_TIMEOUT_SECS" => option_env!("CESTAS_IDLE_TIMEOUT_SECS"),
            "CESTAS_IDLE_WARNING_SECS" => option_env!("CESTAS_IDLE_WARNING_SECS"),
            "CESTAS_LOGOUT_DELAY_MS" => option_env!("CESTAS_LOGOUT_DELAY_MS"),
            _ => None,
        })
    }

    /// Build the config from an arbitrary key lookup. Unparseable or zero
    /// durations fall back to their defaults.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let api_base = lookup("CESTAS_API_BASE")
            .map(str::trim)
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let timeout_secs = parse_positive_u64(lookup("CESTAS_IDLE_TIMEOUT_SECS"), DEFAULT_IDLE_TIMEOUT_SECS);
        let warning_secs = parse_positive_u64(lookup("CESTAS_IDLE_WARNING_SECS"), DEFAULT_IDLE_WARNING_SECS);
        let delay_ms = parse_positive_u64(lookup("CESTAS_LOGOUT_DELAY_MS"), DEFAULT_LOGOUT_DELAY_MS);

        Self {
            api_base,
            idle: IdleTimings {
                timeout: Duration::from_secs(timeout_secs),
                warning: Duration::from_secs(warning_secs.min(timeout_secs)),
                logout_delay: Duration::from_millis(delay_ms),
            },
        }
    }
}

fn parse_positive_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
