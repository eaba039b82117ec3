//! Profile page auth panel: status line plus login/logout visibility.

use crate::model::state::{AuthState, ProfileRecord};
use crate::view::NAME_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPanelView {
    pub status_text: String,
    pub login_visible: bool,
    pub logout_visible: bool,
}

pub fn render_auth_panel(auth: &AuthState, profile: &ProfileRecord) -> AuthPanelView {
    if !auth.is_logged_in {
        return AuthPanelView {
            status_text: "Status: not logged in".to_string(),
            login_visible: true,
            logout_visible: false,
        };
    }

    let status_text = match profile.display_name() {
        Some(name) => format!("Status: logged in{}{}", NAME_SEPARATOR, name),
        None => "Status: logged in".to_string(),
    };
    AuthPanelView {
        status_text,
        login_visible: false,
        logout_visible: true,
    }
}

#[cfg(test)]
mod tests {
    use super::render_auth_panel;
    use crate::model::state::{AuthState, ProfileRecord};

    #[test]
    fn exactly_one_auth_control_is_visible() {
        let profile = ProfileRecord::default();
        for auth in [AuthState::logged_in(), AuthState::logged_out()] {
            let view = render_auth_panel(&auth, &profile);
            assert_ne!(view.login_visible, view.logout_visible);
            assert_eq!(view.logout_visible, auth.is_logged_in);
        }
    }

    #[test]
    fn status_includes_name_only_when_logged_in() {
        let profile = ProfileRecord {
            name: Some("Bo".to_string()),
            ..ProfileRecord::default()
        };
        assert_eq!(
            render_auth_panel(&AuthState::logged_in(), &profile).status_text,
            "Status: logged in • Bo"
        );
        assert_eq!(
            render_auth_panel(&AuthState::logged_out(), &profile).status_text,
            "Status: not logged in"
        );
    }
}
