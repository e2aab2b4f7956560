//! Session storage and navigation for the terminal.
//!
//! The session lives in the current context of the config file, so a
//! token obtained by `mecanaut login` is picked up by later invocations.

use std::path::PathBuf;

use mecanaut_client::{Navigator, SessionStore, UserProfile};
use parking_lot::RwLock;
use tracing::warn;

use crate::config::{ClientConfig, Context};

/// [`SessionStore`] backed by one context of the config file.
pub struct FileSession {
    path: PathBuf,
    context: String,
    cached: RwLock<Context>,
}

impl FileSession {
    pub fn new(path: PathBuf, context: &Context) -> Self {
        Self {
            path,
            context: context.name.clone(),
            cached: RwLock::new(context.clone()),
        }
    }

    /// Apply `update` to the cached context and write it back.
    fn persist(&self, update: impl FnOnce(&mut Context)) {
        let mut cached = self.cached.write();
        update(&mut cached);

        let result = ClientConfig::load(&self.path).and_then(|mut config| {
            match config.get_mut(&self.context) {
                Some(ctx) => {
                    ctx.token = cached.token.clone();
                    ctx.user = cached.user.clone();
                }
                None => config.upsert_context(cached.clone()),
            }
            config.save(&self.path)
        });
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "could not persist session");
        }
    }
}

impl SessionStore for FileSession {
    fn token(&self) -> Option<String> {
        let cached = self.cached.read();
        (!cached.token.is_empty()).then(|| cached.token.clone())
    }

    fn set_token(&self, token: &str) {
        self.persist(|ctx| ctx.token = token.to_string());
    }

    fn user(&self) -> Option<UserProfile> {
        self.cached.read().user.clone()
    }

    fn set_user(&self, user: &UserProfile) {
        self.persist(|ctx| ctx.user = Some(user.clone()));
    }

    fn clear(&self) {
        self.persist(|ctx| {
            ctx.token.clear();
            ctx.user = None;
        });
    }
}

/// Tells the operator to sign in again instead of moving a screen.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn current_path(&self) -> String {
        String::new()
    }

    fn navigate(&self, _path: &str) {
        eprintln!("Session expired. Run `mecanaut login` to sign in again.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(dir: &std::path::Path) -> (PathBuf, Context) {
        let path = dir.join("config.toml");
        let ctx = Context {
            name: "north".to_string(),
            server: "http://localhost:5128/api/v1".to_string(),
            ..Default::default()
        };
        let mut config = ClientConfig::default();
        config.current_context = ctx.name.clone();
        config.upsert_context(ctx.clone());
        config.save(&path).unwrap();
        (path, ctx)
    }

    #[test]
    fn token_is_written_to_the_context() {
        let dir = tempfile::tempdir().unwrap();
        let (path, ctx) = seeded(dir.path());

        let session = FileSession::new(path.clone(), &ctx);
        assert!(!session.is_authenticated());
        session.set_token("t-1");
        assert_eq!(session.token().as_deref(), Some("t-1"));

        let config = ClientConfig::load(&path).unwrap();
        let stored = config.current().unwrap();
        assert_eq!(stored.token, "t-1");
        assert_eq!(stored.server, "http://localhost:5128/api/v1");
    }

    #[test]
    fn clear_drops_token_and_profile_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let (path, ctx) = seeded(dir.path());

        let session = FileSession::new(path.clone(), &ctx);
        session.set_token("t-1");
        session.set_user(&UserProfile {
            id: 1,
            username: "admin".to_string(),
            full_name: None,
            email: None,
            roles: None,
        });
        session.clear();

        assert!(session.token().is_none());
        assert!(session.user().is_none());
        let config = ClientConfig::load(&path).unwrap();
        let stored = config.current().unwrap();
        assert!(stored.token.is_empty());
        assert!(stored.user.is_none());
    }
}
