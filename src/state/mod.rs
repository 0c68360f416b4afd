//! Page state for the workspace and its sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section owns one plain state struct. `AppStores` bundles one store
//! per struct so services and components share a single handle; the store
//! backing is chosen by the `StoreKind` parameter.

pub mod dashboard;
pub mod deliveries;
pub mod families;
pub mod nav;
pub mod session;
pub mod stock;
pub mod supplies;

use time::Date;

use crate::util::store::{Signals, StoreKind};

use self::dashboard::DashboardState;
use self::deliveries::DeliveriesState;
use self::families::FamiliesState;
use self::nav::NavState;
use self::session::SessionState;
use self::stock::StockState;
use self::supplies::SuppliesState;

/// One store per section.
pub struct AppStores<K: StoreKind = Signals> {
    pub nav: K::Store<NavState>,
    pub session: K::Store<SessionState>,
    pub dashboard: K::Store<DashboardState>,
    pub families: K::Store<FamiliesState>,
    pub deliveries: K::Store<DeliveriesState>,
    pub supplies: K::Store<SuppliesState>,
    pub stock: K::Store<StockState>,
}

impl<K: StoreKind> Clone for AppStores<K> {
    fn clone(&self) -> Self {
        Self {
            nav: self.nav.clone(),
            session: self.session.clone(),
            dashboard: self.dashboard.clone(),
            families: self.families.clone(),
            deliveries: self.deliveries.clone(),
            supplies: self.supplies.clone(),
            stock: self.stock.clone(),
        }
    }
}

impl<K: StoreKind> AppStores<K> {
    /// Fresh state with the delivery date preset to `today`.
    pub fn new(today: Date) -> Self {
        Self {
            nav: K::store(NavState::default()),
            session: K::store(SessionState::default()),
            dashboard: K::store(DashboardState::default()),
            families: K::store(FamiliesState::default()),
            deliveries: K::store(DeliveriesState::new(today)),
            supplies: K::store(SuppliesState::default()),
            stock: K::store(StockState::default()),
        }
    }
}
