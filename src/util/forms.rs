//! Client-side validation and small form helpers.
//!
//! Validation runs before any request is built. A failure blocks the
//! submission and is rendered inline by the section that raised it.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use thiserror::Error;
use time::Date;
use time::macros::format_description;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Informe nome e unidade.")]
    SupplyFieldsRequired,
    #[error("Informe o nome do kit.")]
    KitNameRequired,
    #[error("Selecione um kit.")]
    KitNotSelected,
    #[error("Selecione um insumo.")]
    SupplyNotSelected,
    #[error("Informe uma quantidade válida (maior que zero).")]
    InvalidQuantity,
    #[error("Informe uma quantidade de cestas válida (número inteiro maior que zero).")]
    InvalidStockQuantity,
    #[error("Informe usuário e senha.")]
    CredentialsRequired,
}

/// Trimmed value, or `None` when blank.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Parse a select value holding a numeric id. Blank means "nothing selected".
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parse a kit-item quantity: a finite decimal strictly greater than zero.
/// A comma is accepted as the decimal separator.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidQuantity`] for blank, non-numeric or
/// non-positive input.
pub fn parse_quantity(raw: &str) -> Result<f64, ValidationError> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

/// Parse a basket count for a stock entry: a positive integer.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStockQuantity`] otherwise.
pub fn parse_basket_count(raw: &str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ValidationError::InvalidStockQuantity),
    }
}

/// Parse an HTML date input value (`YYYY-MM-DD`).
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Format a date the way HTML date inputs expect it.
pub fn format_iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Age in whole years on `today` for someone born on `birth`.
/// Returns `None` for unparseable or future birth dates.
pub fn age_on(birth: &str, today: Date) -> Option<u32> {
    let birth = parse_iso_date(birth)?;
    if birth > today {
        return None;
    }
    let mut years = today.year() - birth.year();
    if (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
