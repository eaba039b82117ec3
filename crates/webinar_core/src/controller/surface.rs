//! Host-provided page regions.
//!
//! Every region method defaults to a no-op so a page lacking that region
//! simply skips it.

use crate::model::profile_form::{ProfileField, ProfileForm, ProfileValidationError};
use crate::view::{AuthPanelView, CatalogGridView, MyItemsView, NavStatusView};

/// Binary toast notifications requested by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    MustLogIn,
    Joined,
}

impl Notification {
    /// Stable widget id on the page.
    pub fn id(self) -> &'static str {
        match self {
            Self::MustLogIn => "authToast",
            Self::Joined => "joinToast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Secondary,
}

/// Message shown in the profile page alert region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
}

/// Regions of the catalog page.
pub trait CatalogSurface {
    fn render_nav_status(&mut self, _view: &NavStatusView) {}
    fn render_catalog_grid(&mut self, _view: &CatalogGridView) {}
    fn notify(&mut self, _notification: Notification) {}
}

/// Regions and form controls of the profile page.
pub trait ProfileSurface {
    /// Current raw values of the form controls.
    fn form_values(&self) -> ProfileForm;

    fn preload_field(&mut self, _field: ProfileField, _value: &str) {}
    fn mark_form_invalid(&mut self, _error: &ProfileValidationError) {}
    fn show_alert(&mut self, _alert: &Alert) {}
    fn render_auth_panel(&mut self, _view: &AuthPanelView) {}
    fn render_my_items(&mut self, _view: &MyItemsView) {}
}
