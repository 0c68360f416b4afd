use super::*;

#[test]
fn local_date_converts_zero_based_month() {
    let date = local_date(2025, 0, 31).unwrap();
    assert_eq!(date.year(), 2025);
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(), 31);
}

#[test]
fn local_date_rejects_impossible_dates() {
    assert_eq!(local_date(2025, 1, 30), None);
    assert_eq!(local_date(2025, 12, 1), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_web_browser_never_confirms() {
    assert!(!WebBrowser.confirm("Remover este item do kit?"));
}

#[test]
fn web_browser_clock_is_after_epoch() {
    assert!(WebBrowser.now_ms() > 0.0);
}
