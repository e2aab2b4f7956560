//! Session context: the bearer token and the cached user profile.
//!
//! The store is injected into every [`ApiClient`](crate::ApiClient) and
//! read at request time, so a token obtained after the client was built
//! is still honored.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Minimal cached user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Authentication state derived from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Persistent client storage for the session.
///
/// Implementations must be cheap to read; the client calls `token()` on
/// every authenticated request.
pub trait SessionStore: Send + Sync + 'static {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str);

    fn user(&self) -> Option<UserProfile>;

    fn set_user(&self, user: &UserProfile);

    /// Remove both the token and the profile.
    fn clear(&self);

    /// True iff a non-empty token is stored. No expiry check is done
    /// locally; the server decides via 401.
    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// In-process session store.
#[derive(Debug, Default)]
pub struct MemorySession {
    inner: RwLock<Stored>,
}

#[derive(Debug, Default)]
struct Stored {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-known token (e.g. loaded from disk).
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.set_token(&token.into());
        session
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    fn set_token(&self, token: &str) {
        self.inner.write().token = Some(token.to_string());
    }

    fn user(&self) -> Option<UserProfile> {
        self.inner.read().user.clone()
    }

    fn set_user(&self, user: &UserProfile) {
        self.inner.write().user = Some(user.clone());
    }

    fn clear(&self) {
        let mut guard = self.inner.write();
        guard.token = None;
        guard.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_is_anonymous() {
        let session = MemorySession::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let session = MemorySession::with_token("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clear_removes_token_and_user() {
        let session = MemorySession::with_token("abc123");
        session.set_user(&UserProfile {
            id: 1,
            username: "admin".into(),
            full_name: None,
            email: None,
            roles: None,
        });
        assert_eq!(session.state(), SessionState::Authenticated);

        session.clear();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn profile_json_is_camel_case() {
        let user = UserProfile {
            id: 7,
            username: "jdoe".into(),
            full_name: Some("Jane Doe".into()),
            email: None,
            roles: Some(vec!["RoleTechnical".into()]),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert!(json.get("email").is_none());
    }
}
