//! Structured row and option descriptors for tables and selects.
//!
//! DESIGN
//! ======
//! Services map DTOs to these descriptors and store them in page state;
//! components only turn descriptors into markup. Keeping the mapping pure
//! lets tests assert on exactly what a table will show.

#[cfg(test)]
#[path = "rows_test.rs"]
mod rows_test;

/// Shown in place of missing optional values.
pub const PLACEHOLDER: &str = "—";

/// An action button rendered inside a table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    EditFamily(i64),
    FamilyDetails(i64),
    RemoveKitItem(i64),
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::EditFamily(_) => "Editar",
            Self::FamilyDetails(_) => "Detalhes",
            Self::RemoveKitItem(_) => "Remover",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::EditFamily(_) => "btn-primary",
            Self::FamilyDetails(_) => "btn-secondary",
            Self::RemoveKitItem(_) => "btn-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    /// A single cell spanning `span` columns, used for empty-state messages.
    Wide { text: String, span: u32 },
    Actions(Vec<RowAction>),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text content of the cell; action cells render their labels.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) | Self::Wide { text, .. } => text.clone(),
            Self::Actions(actions) => actions.iter().map(|a| a.label()).collect::<Vec<_>>().join(" "),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// Stable key for keyed rendering.
    pub key: String,
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn new(key: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self { key: key.into(), cells }
    }

    /// A one-cell row spanning the whole table.
    pub fn message(text: impl Into<String>, span: u32) -> Self {
        Self { key: "message".to_owned(), cells: vec![Cell::Wide { text: text.into(), span }] }
    }

    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(Cell::display).collect()
    }
}

/// One `<option>` of a select control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// Leading empty-value option.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self { value: String::new(), label: label.into() }
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Sim" } else { "Não" }
}

/// `Some("")` and `None` both render as the placeholder.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Render a decimal quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let rendered = format!("{value:.3}");
        rendered.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
