//! Pure renderers from persisted state and the catalog to view models.
//!
//! # Responsibility
//! - Recompute one page region in full from current state on every call.
//! - Derive control enablement and labels from auth and membership.
//!
//! # Invariants
//! - Renderers are total and idempotent; equal inputs give equal views.
//! - No renderer reads or writes storage itself.

pub mod auth_panel;
pub mod catalog_grid;
pub mod event;
pub mod my_items;
pub mod nav_status;

pub use auth_panel::{render_auth_panel, AuthPanelView};
pub use catalog_grid::{
    render_catalog_grid, CatalogCard, CatalogGridView, ControlEmphasis, JoinControl,
};
pub use event::UiEvent;
pub use my_items::{render_my_items, MyItemRow, MyItemsView};
pub use nav_status::{render_nav_status, NavStatusView};

/// Separator between the status phrase and the visitor's name.
pub(crate) const NAME_SEPARATOR: &str = " • ";
