//! Catalog page: nav status, catalog grid and the join protocol.

use crate::controller::surface::{CatalogSurface, Notification};
use crate::controller::PageResult;
use crate::model::catalog::{catalog, find_item};
use crate::repo::kv_repo::KvRepository;
use crate::service::state_service::StateService;
use crate::view::{render_catalog_grid, render_nav_status, UiEvent};
use log::{debug, info, warn};

/// Result of one join click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Visitor is a guest; nothing changed.
    MustLogIn,
    /// Id was appended and persisted.
    Joined,
    /// Id was already present; nothing changed.
    AlreadyJoined,
    /// Id is not in the catalog; nothing changed.
    UnknownItem,
}

pub struct CatalogPage<R: KvRepository> {
    state: StateService<R>,
}

impl<R: KvRepository> CatalogPage<R> {
    pub fn new(repo: R) -> Self {
        Self {
            state: StateService::new(repo),
        }
    }

    pub fn state(&self) -> &StateService<R> {
        &self.state
    }

    /// Renders every region from current state.
    pub fn init(&self, surface: &mut impl CatalogSurface) {
        self.refresh_nav_status(surface);
        self.refresh_grid(surface);
    }

    /// Dispatches one gesture. Gestures of other pages are ignored.
    pub fn handle(&self, surface: &mut impl CatalogSurface, event: &UiEvent) -> PageResult<()> {
        match event {
            UiEvent::JoinClicked { item_id } => self.join(surface, item_id).map(|_| ()),
            other => {
                debug!("event=ui_event module=catalog_page status=ignored kind={other:?}");
                Ok(())
            }
        }
    }

    /// Marks `item_id` joined for a logged-in visitor.
    ///
    /// State is re-read at click time, so a click on a control rendered
    /// before a logout or an earlier join is judged against current state.
    pub fn join(
        &self,
        surface: &mut impl CatalogSurface,
        item_id: &str,
    ) -> PageResult<JoinOutcome> {
        if !self.state.get_auth().is_logged_in {
            info!(
                "event=join module=catalog_page status=rejected reason=guest item_id={item_id}"
            );
            surface.notify(Notification::MustLogIn);
            return Ok(JoinOutcome::MustLogIn);
        }

        if find_item(item_id).is_none() {
            warn!(
                "event=join module=catalog_page status=ignored reason=unknown_item item_id={item_id}"
            );
            return Ok(JoinOutcome::UnknownItem);
        }

        let mut joined = self.state.get_joined();
        if !joined.insert(item_id) {
            debug!(
                "event=join module=catalog_page status=noop reason=already_joined item_id={item_id}"
            );
            return Ok(JoinOutcome::AlreadyJoined);
        }

        self.state.set_joined(&joined)?;
        info!(
            "event=join module=catalog_page status=ok item_id={item_id} joined_count={}",
            joined.len()
        );
        surface.notify(Notification::Joined);
        self.refresh_grid(surface);
        Ok(JoinOutcome::Joined)
    }

    fn refresh_nav_status(&self, surface: &mut impl CatalogSurface) {
        let view = render_nav_status(&self.state.get_auth(), &self.state.get_profile());
        surface.render_nav_status(&view);
    }

    fn refresh_grid(&self, surface: &mut impl CatalogSurface) {
        let view = render_catalog_grid(
            &self.state.get_auth(),
            &self.state.get_joined(),
            catalog(),
        );
        surface.render_catalog_grid(&view);
    }
}
