//! Navigation banner status.

use crate::model::state::{AuthState, ProfileRecord};
use crate::view::NAME_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStatusView {
    pub visible: bool,
    pub text: String,
}

pub fn render_nav_status(auth: &AuthState, profile: &ProfileRecord) -> NavStatusView {
    let text = if auth.is_logged_in {
        match profile.display_name() {
            Some(name) => format!("Logged in{}{}", NAME_SEPARATOR, name),
            None => "Logged in".to_string(),
        }
    } else {
        "Not logged in".to_string()
    };

    NavStatusView {
        visible: true,
        text,
    }
}
