//! Section navigation state.
//!
//! DESIGN
//! ======
//! The workspace page shows exactly one section at a time. `NavState` only
//! records which one is active; visibility of every section and nav button
//! is derived from it, so "one visible, one active" holds by construction.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Logical sections of the workspace page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    FamilyRegistration,
    Deliveries,
    FamilySearch,
    History,
    SupplyItems,
    Kits,
    Stock,
}

/// Data loaders a section triggers when it becomes active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loader {
    Dashboard,
    FamilySelect,
    FamilySearch,
    FamilyFilter,
    Deliveries,
    SupplyItems,
    Kits,
    StockBalance,
    StockMovements,
}

impl Section {
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::FamilyRegistration,
        Self::Deliveries,
        Self::FamilySearch,
        Self::History,
        Self::SupplyItems,
        Self::Kits,
        Self::Stock,
    ];

    /// DOM id of the section container.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::FamilyRegistration => "cadastro",
            Self::Deliveries => "entregas",
            Self::FamilySearch => "consulta",
            Self::History => "historico",
            Self::SupplyItems => "insumos",
            Self::Kits => "kits",
            Self::Stock => "estoque",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// DOM id of the nav button that opens this section.
    pub fn nav_id(self) -> String {
        nav_button_id(self.id())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::FamilyRegistration => "Cadastro",
            Self::Deliveries => "Entregas",
            Self::FamilySearch => "Consulta",
            Self::History => "Histórico",
            Self::SupplyItems => "Insumos",
            Self::Kits => "Kits",
            Self::Stock => "Estoque",
        }
    }

    pub fn loaders(self) -> &'static [Loader] {
        match self {
            Self::Dashboard => &[Loader::Dashboard],
            Self::FamilyRegistration => &[],
            Self::Deliveries => &[Loader::FamilySelect],
            Self::FamilySearch => &[Loader::FamilySearch],
            Self::History => &[Loader::FamilyFilter, Loader::Deliveries],
            Self::SupplyItems => &[Loader::SupplyItems],
            Self::Kits => &[Loader::SupplyItems, Loader::Kits],
            Self::Stock => &[Loader::StockBalance, Loader::StockMovements],
        }
    }
}

/// `"nav"` followed by the section id with its first letter capitalized.
pub fn nav_button_id(section_id: &str) -> String {
    let mut chars = section_id.chars();
    match chars.next() {
        Some(first) => format!("nav{}{}", first.to_uppercase(), chars.as_str()),
        None => "nav".to_owned(),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
}

impl NavState {
    /// Make `section` the only visible section and return its loaders.
    pub fn activate(&mut self, section: Section) -> &'static [Loader] {
        self.active = section;
        section.loaders()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn is_nav_active(&self, nav_id: &str) -> bool {
        self.active.nav_id() == nav_id
    }
}
