//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read page state from the stores on the context-provided
//! `WebController` and spawn its operations from event handlers. They hold
//! no request logic of their own.

pub mod dashboard_panel;
pub mod data_table;
pub mod delivery_form;
pub mod delivery_history;
pub mod family_form;
pub mod family_search;
pub mod form_field;
pub mod kits_panel;
pub mod nav_bar;
pub mod session_guard;
pub mod stock_panel;
pub mod supplies_panel;
