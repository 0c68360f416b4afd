//! View-state port used by the services.
//!
//! DESIGN
//! ======
//! Services never touch signals directly. They read and write page state
//! through [`ViewStore`], which the browser build backs with Leptos
//! `RwSignal`s and tests back with plain shared cells. A [`StoreKind`]
//! picks the backing for a whole bundle of stores at once.

use leptos::prelude::*;

/// Read/write access to one piece of page state.
///
/// Both accessors return `None` once the backing view has been disposed,
/// so late responses for a torn-down page are dropped.
pub trait ViewStore<T>: Clone + 'static {
    /// Read without subscribing the caller to changes.
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    /// Mutate in place and notify the view.
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> ViewStore<T> for RwSignal<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Family of store types used to build an [`AppStores`](crate::state::AppStores) bundle.
pub trait StoreKind: Clone + 'static {
    type Store<T: Send + Sync + 'static>: ViewStore<T>;

    fn store<T: Send + Sync + 'static>(value: T) -> Self::Store<T>;
}

/// Stores backed by Leptos signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Signals;

impl StoreKind for Signals {
    type Store<T: Send + Sync + 'static> = RwSignal<T>;

    fn store<T: Send + Sync + 'static>(value: T) -> RwSignal<T> {
        RwSignal::new(value)
    }
}
