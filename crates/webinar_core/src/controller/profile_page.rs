//! Profile page: form, simulated login/logout and the "my webinars" list.

use crate::controller::surface::{Alert, AlertKind, ProfileSurface};
use crate::controller::PageResult;
use crate::model::catalog::catalog;
use crate::model::profile_form::ProfileField;
use crate::model::state::AuthState;
use crate::repo::kv_repo::KvRepository;
use crate::service::state_service::StateService;
use crate::view::{render_auth_panel, render_my_items, UiEvent};
use log::{debug, info};

pub const LOGIN_EMAIL_REQUIRED: Alert = Alert {
    kind: AlertKind::Warning,
    message: "Enter an email in the profile form, then press Log in / Sign up.",
};
pub const LOGGED_IN: Alert = Alert {
    kind: AlertKind::Success,
    message: "Logged in. You can now join webinars.",
};
pub const LOGGED_OUT: Alert = Alert {
    kind: AlertKind::Secondary,
    message: "You have logged out. Webinar sign-ups were reset (demo).",
};
pub const JOINED_CLEARED: Alert = Alert {
    kind: AlertKind::Secondary,
    message: "The \"My webinars\" list was cleared.",
};
pub const PROFILE_SAVED: Alert = Alert {
    kind: AlertKind::Success,
    message: "Profile saved.",
};

pub struct ProfilePage<R: KvRepository> {
    state: StateService<R>,
}

impl<R: KvRepository> ProfilePage<R> {
    pub fn new(repo: R) -> Self {
        Self {
            state: StateService::new(repo),
        }
    }

    pub fn state(&self) -> &StateService<R> {
        &self.state
    }

    /// Preloads saved profile fields, then renders auth panel and my items.
    pub fn init(&self, surface: &mut impl ProfileSurface) {
        let saved = self.state.get_profile();
        let fields = [
            (ProfileField::Name, saved.name.as_deref()),
            (ProfileField::Email, saved.email.as_deref()),
            (ProfileField::Role, saved.role.as_deref()),
        ];
        for (field, value) in fields {
            if let Some(value) = value.filter(|value| !value.is_empty()) {
                surface.preload_field(field, value);
            }
        }

        self.refresh_auth_panel(surface);
        self.refresh_my_items(surface);
    }

    /// Dispatches one gesture. Gestures of other pages are ignored.
    pub fn handle(&self, surface: &mut impl ProfileSurface, event: &UiEvent) -> PageResult<()> {
        match event {
            UiEvent::LoginClicked => self.login(surface).map(|_| ()),
            UiEvent::LogoutClicked => self.logout(surface),
            UiEvent::ClearJoinedClicked => self.clear_joined(surface),
            UiEvent::ProfileSubmitted => self.save_profile(surface).map(|_| ()),
            other => {
                debug!("event=ui_event module=profile_page status=ignored kind={other:?}");
                Ok(())
            }
        }
    }

    /// Sets the auth flag when the form's email field is non-blank.
    ///
    /// Returns whether the visitor is now logged in.
    pub fn login(&self, surface: &mut impl ProfileSurface) -> PageResult<bool> {
        let form = surface.form_values();
        if form.trimmed_email().is_empty() {
            info!("event=login module=profile_page status=rejected reason=missing_email");
            surface.show_alert(&LOGIN_EMAIL_REQUIRED);
            return Ok(false);
        }

        self.state.set_auth(AuthState::logged_in())?;
        info!("event=login module=profile_page status=ok");
        surface.show_alert(&LOGGED_IN);
        self.refresh_auth_panel(surface);
        Ok(true)
    }

    /// Forgets every joined item and clears the auth flag; the profile stays.
    ///
    /// The joined set is cleared first: if that write fails the visitor is
    /// still logged in with the set intact, never logged out with stale ids.
    pub fn logout(&self, surface: &mut impl ProfileSurface) -> PageResult<()> {
        self.state.clear_joined()?;
        self.state.set_auth(AuthState::logged_out())?;
        info!("event=logout module=profile_page status=ok joined_cleared=true");
        surface.show_alert(&LOGGED_OUT);
        self.refresh_auth_panel(surface);
        self.refresh_my_items(surface);
        Ok(())
    }

    pub fn clear_joined(&self, surface: &mut impl ProfileSurface) -> PageResult<()> {
        self.state.clear_joined()?;
        info!("event=clear_joined module=profile_page status=ok");
        surface.show_alert(&JOINED_CLEARED);
        self.refresh_my_items(surface);
        Ok(())
    }

    /// Validates the form and replaces the saved profile with its values.
    ///
    /// Returns whether the profile was saved.
    pub fn save_profile(&self, surface: &mut impl ProfileSurface) -> PageResult<bool> {
        let record = match surface.form_values().check_validity() {
            Ok(record) => record,
            Err(err) => {
                info!(
                    "event=profile_save module=profile_page status=rejected reason={}",
                    err.code()
                );
                surface.mark_form_invalid(&err);
                return Ok(false);
            }
        };

        self.state.set_profile(&record)?;
        info!("event=profile_save module=profile_page status=ok");
        surface.show_alert(&PROFILE_SAVED);
        self.refresh_auth_panel(surface);
        Ok(true)
    }

    fn refresh_auth_panel(&self, surface: &mut impl ProfileSurface) {
        let view = render_auth_panel(&self.state.get_auth(), &self.state.get_profile());
        surface.render_auth_panel(&view);
    }

    fn refresh_my_items(&self, surface: &mut impl ProfileSurface) {
        surface.render_my_items(&render_my_items(&self.state.get_joined(), catalog()));
    }
}
