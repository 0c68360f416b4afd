use super::*;

fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[test]
fn from_lookup_uses_defaults_when_empty() {
    let cfg = ClientConfig::from_lookup(|_| None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.idle.timeout, Duration::from_secs(900));
    assert_eq!(cfg.idle.warning, Duration::from_secs(60));
    assert_eq!(cfg.idle.logout_delay, Duration::from_millis(2_000));
    assert_eq!(cfg.api_base, "");
}

#[test]
fn from_lookup_trims_trailing_slash_from_api_base() {
    let pairs = [("CESTAS_API_BASE", " https://cestas.example.org/ ")];
    let cfg = ClientConfig::from_lookup(lookup_from(&pairs));
    assert_eq!(cfg.api_base, "https://cestas.example.org");
}

#[test]
fn from_lookup_parses_idle_overrides() {
    let pairs = [
        ("CESTAS_IDLE_TIMEOUT_SECS", "300"),
        ("CESTAS_IDLE_WARNING_SECS", "30"),
        ("CESTAS_LOGOUT_DELAY_MS", "500"),
    ];
    let cfg = ClientConfig::from_lookup(lookup_from(&pairs));
    assert_eq!(cfg.idle.timeout, Duration::from_secs(300));
    assert_eq!(cfg.idle.warning, Duration::from_secs(30));
    assert_eq!(cfg.idle.logout_delay, Duration::from_millis(500));
}

#[test]
fn from_lookup_ignores_invalid_and_zero_values() {
    let pairs = [("CESTAS_IDLE_TIMEOUT_SECS", "abc"), ("CESTAS_IDLE_WARNING_SECS", "0")];
    let cfg = ClientConfig::from_lookup(lookup_from(&pairs));
    assert_eq!(cfg.idle.timeout, Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS));
    assert_eq!(cfg.idle.warning, Duration::from_secs(DEFAULT_IDLE_WARNING_SECS));
}

#[test]
fn warning_window_never_exceeds_timeout() {
    let pairs = [("CESTAS_IDLE_TIMEOUT_SECS", "20"), ("CESTAS_IDLE_WARNING_SECS", "60")];
    let cfg = ClientConfig::from_lookup(lookup_from(&pairs));
    assert_eq!(cfg.idle.warning, Duration::from_secs(20));
}
