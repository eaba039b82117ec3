//! "My webinars" list.

use crate::model::catalog::CatalogItem;
use crate::model::state::JoinedSet;

pub const EMPTY_MESSAGE: &str = "You have not joined any webinars yet.";
pub const JOINED_BADGE: &str = "Joined";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyItemRow {
    pub item_id: String,
    pub title: String,
    pub date: String,
    pub level: String,
    pub badge: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MyItemsView {
    Empty { message: &'static str },
    Items(Vec<MyItemRow>),
}

/// Lists joined items in join order; ids missing from `catalog` are dropped.
pub fn render_my_items(joined: &JoinedSet, catalog: &[CatalogItem]) -> MyItemsView {
    if joined.is_empty() {
        return MyItemsView::Empty {
            message: EMPTY_MESSAGE,
        };
    }

    let rows = joined
        .ids()
        .filter_map(|id| catalog.iter().find(|item| item.id == id))
        .map(|item| MyItemRow {
            item_id: item.id.to_string(),
            title: item.title.to_string(),
            date: item.date.to_string(),
            level: item.level.to_string(),
            badge: JOINED_BADGE,
        })
        .collect();

    MyItemsView::Items(rows)
}
