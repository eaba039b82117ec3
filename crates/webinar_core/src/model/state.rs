//! Persisted visitor state slices.
//!
//! # Invariants
//! - `AuthState::default()` is logged out.
//! - `ProfileRecord::default()` has every field absent ("no profile yet").
//! - `JoinedSet::default()` is empty and never holds duplicate ids.

use serde::{Deserialize, Serialize};

/// Local, unverified login flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default)]
    pub is_logged_in: bool,
}

impl AuthState {
    pub fn logged_in() -> Self {
        Self { is_logged_in: true }
    }

    pub fn logged_out() -> Self {
        Self {
            is_logged_in: false,
        }
    }
}

/// Saved visitor profile. Saving replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ProfileRecord {
    /// Returns the name when present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Ordered ids of joined catalog items with set semantics.
///
/// Serialized as a bare JSON array of strings. Duplicates in stored data are
/// collapsed on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct JoinedSet(Vec<String>);

impl JoinedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|joined| joined == id)
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for JoinedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<String>> for JoinedSet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<JoinedSet> for Vec<String> {
    fn from(value: JoinedSet) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthState, JoinedSet, ProfileRecord};

    #[test]
    fn auth_uses_camel_case_and_defaults_missing_flag() {
        let json = serde_json::to_string(&AuthState::logged_in()).unwrap();
        assert_eq!(json, r#"{"isLoggedIn":true}"#);
        let decoded: AuthState = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, AuthState::default());
    }

    #[test]
    fn profile_skips_absent_fields() {
        let profile = ProfileRecord {
            name: Some("Ann".to_string()),
            ..ProfileRecord::default()
        };
        assert_eq!(serde_json::to_string(&profile).unwrap(), r#"{"name":"Ann"}"#);
        assert_eq!(
            serde_json::to_string(&ProfileRecord::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn display_name_ignores_empty_name() {
        let profile = ProfileRecord {
            name: Some(String::new()),
            ..ProfileRecord::default()
        };
        assert_eq!(profile.display_name(), None);
    }

    #[test]
    fn joined_set_keeps_order_and_rejects_duplicates() {
        let mut joined = JoinedSet::new();
        assert!(joined.insert("w2"));
        assert!(joined.insert("w1"));
        assert!(!joined.insert("w2"));
        assert_eq!(joined.ids().collect::<Vec<_>>(), vec!["w2", "w1"]);
        assert_eq!(serde_json::to_string(&joined).unwrap(), r#"["w2","w1"]"#);
    }

    #[test]
    fn joined_set_collapses_duplicates_from_any_source() {
        let joined: JoinedSet = ["w1", "w1", "w3"].into_iter().collect();
        assert_eq!(joined.len(), 2);
        let decoded: JoinedSet = serde_json::from_str(r#"["w3","w3","w1"]"#).unwrap();
        assert_eq!(decoded.ids().collect::<Vec<_>>(), vec!["w3", "w1"]);
    }
}
