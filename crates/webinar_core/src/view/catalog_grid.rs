//! Catalog grid with a three-way join control per card.
//!
//! | logged in | joined | enabled | label            | emphasis |
//! |-----------|--------|---------|------------------|----------|
//! | no        | any    | no      | "Log in to join" | Muted    |
//! | yes       | no     | yes     | "Join"           | Primary  |
//! | yes       | yes    | no      | "Joined"         | Success  |

use crate::model::catalog::CatalogItem;
use crate::model::state::{AuthState, JoinedSet};
use crate::view::event::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEmphasis {
    Muted,
    Primary,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinControl {
    pub item_id: String,
    pub enabled: bool,
    pub label: &'static str,
    pub emphasis: ControlEmphasis,
    /// Click binding, present on every control. `CatalogPage::join` re-checks
    /// current state, so a click on a disabled control is harmless.
    pub on_click: UiEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCard {
    pub title: String,
    pub date: String,
    pub level: String,
    pub control: JoinControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGridView {
    pub cards: Vec<CatalogCard>,
}

impl CatalogGridView {
    pub fn card(&self, item_id: &str) -> Option<&CatalogCard> {
        self.cards
            .iter()
            .find(|card| card.control.item_id == item_id)
    }
}

pub fn render_catalog_grid(
    auth: &AuthState,
    joined: &JoinedSet,
    catalog: &[CatalogItem],
) -> CatalogGridView {
    let cards = catalog
        .iter()
        .map(|item| CatalogCard {
            title: item.title.to_string(),
            date: item.date.to_string(),
            level: item.level.to_string(),
            control: join_control(item.id, auth.is_logged_in, joined.contains(item.id)),
        })
        .collect();

    CatalogGridView { cards }
}

fn join_control(item_id: &str, logged_in: bool, joined: bool) -> JoinControl {
    let (enabled, label, emphasis) = match (logged_in, joined) {
        (false, _) => (false, "Log in to join", ControlEmphasis::Muted),
        (true, false) => (true, "Join", ControlEmphasis::Primary),
        (true, true) => (false, "Joined", ControlEmphasis::Success),
    };

    JoinControl {
        item_id: item_id.to_string(),
        enabled,
        label,
        emphasis,
        on_click: UiEvent::JoinClicked {
            item_id: item_id.to_string(),
        },
    }
}
