//! Core data engine for a virtualized, editable employee table.
//!
//! The presentation layer (table widget, input chrome, scrolling surface) is
//! a separate concern; everything here is callable, synchronous, and owns no
//! UI state beyond the per-cell edit machine.

/// Configuration loading and defaults.
pub mod config;
/// Shared default constants.
pub mod constants;
/// Per-cell view/edit state machine.
pub mod edit;
/// Error types for the mutation path.
pub mod error;
/// Row record and request/response models.
pub mod models;
/// Filter, sort, and pagination over store snapshots.
pub mod query;
/// Synthetic row generation.
pub mod seed;
/// Canonical row store and mutation engine.
pub mod store;
/// Virtual scroll window calculator.
pub mod window;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use edit::CellEdit;
pub use error::TableError;
pub use models::{
    CellValue, Column, Employee, QueryParams, QueryResult, SortColumn, SortDirection,
    UpdateRequest,
};
pub use query::query;
pub use store::EmployeeStore;
pub use window::{compute_window, VirtualWindow, WindowParams};
