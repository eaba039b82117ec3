//! User gestures delivered by a page host.

/// One user gesture; handled to completion before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on the join control of a catalog card.
    JoinClicked { item_id: String },
    LoginClicked,
    LogoutClicked,
    ClearJoinedClicked,
    /// Submit of the profile form.
    ProfileSubmitted,
}
