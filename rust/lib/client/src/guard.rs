//! Route guards for screens that need (or must not have) a session.

use crate::config::ApiConfig;
use crate::session::SessionStore;

/// What a guarded navigation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(String),
}

/// Screens that need a session send anonymous visitors to the login screen.
pub fn require_auth(session: &dyn SessionStore, config: &ApiConfig) -> GuardOutcome {
    if session.is_authenticated() {
        GuardOutcome::Proceed
    } else {
        GuardOutcome::Redirect(config.guest_path.clone())
    }
}

/// Login / registration screens send authenticated visitors home.
pub fn require_guest(session: &dyn SessionStore, config: &ApiConfig) -> GuardOutcome {
    if session.is_authenticated() {
        GuardOutcome::Redirect(config.home_path.clone())
    } else {
        GuardOutcome::Proceed
    }
}

/// Per-route access check. Only authentication is checked; roles are not.
pub fn can_access(session: &dyn SessionStore, config: &ApiConfig) -> GuardOutcome {
    require_auth(session, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    #[test]
    fn anonymous_visitor() {
        let session = MemorySession::new();
        let config = ApiConfig::default();
        assert_eq!(require_auth(&session, &config), GuardOutcome::Redirect("/login".into()));
        assert_eq!(require_guest(&session, &config), GuardOutcome::Proceed);
        assert_eq!(can_access(&session, &config), GuardOutcome::Redirect("/login".into()));
    }

    #[test]
    fn authenticated_visitor() {
        let session = MemorySession::with_token("abc123");
        let config = ApiConfig::default();
        assert_eq!(require_auth(&session, &config), GuardOutcome::Proceed);
        assert_eq!(require_guest(&session, &config), GuardOutcome::Redirect("/".into()));
    }
}
