//! Client-side context management.
//!
//! Reads/writes `~/.mecanaut/config.toml`.

use std::path::{Path, PathBuf};

use mecanaut_client::UserProfile;
use serde::{Deserialize, Serialize};

/// A single context: one backend plus the session obtained from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name (e.g. "plant-north").
    pub name: String,

    /// Backend origin including `/api/v1`. Empty means the built-in default.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Bearer token (set by `mecanaut login`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Profile cached at sign-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name of the currently active context.
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl ClientConfig {
    /// ~/.mecanaut/config.toml, or `$MECANAUT_CONFIG` when set.
    pub fn default_path() -> PathBuf {
        match std::env::var("MECANAUT_CONFIG") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs_path().join("config.toml"),
        }
    }

    /// A missing file reads as an empty config.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => anyhow::bail!("Failed to read {}: {}", path.display(), e),
        };
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))
    }

    pub fn current(&self) -> Option<&Context> {
        self.find(&self.current_context)
    }

    pub fn find(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|c| c.name == name)
    }

    /// Replace the context with the same name, or append it.
    pub fn upsert_context(&mut self, ctx: Context) {
        match self.get_mut(&ctx.name) {
            Some(existing) => *existing = ctx,
            None => self.contexts.push(ctx),
        }
    }

    /// Returns false when no context had that name. Removing the current
    /// context leaves no context selected.
    pub fn remove_context(&mut self, name: &str) -> bool {
        let Some(index) = self.contexts.iter().position(|c| c.name == name) else {
            return false;
        };
        self.contexts.remove(index);
        if self.current_context == name {
            self.current_context.clear();
        }
        true
    }
}

fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".mecanaut")
}
