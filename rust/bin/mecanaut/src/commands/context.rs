//! Context management commands.

use std::path::Path;

use anyhow::Result;

use crate::config::{ClientConfig, Context};

/// Register a new context pointing at `server`.
pub fn create(name: &str, server: Option<&str>, client_config_path: &Path) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Context name cannot be empty.");
    }

    let mut config = ClientConfig::load(client_config_path)?;
    if config.find(name).is_some() {
        anyhow::bail!(
            "Context \"{}\" already exists. Use `mecanaut context set {} --server <url>`.",
            name,
            name
        );
    }

    config.upsert_context(Context {
        name: name.to_string(),
        server: server.unwrap_or_default().to_string(),
        ..Default::default()
    });
    if config.current_context.is_empty() {
        config.current_context = name.to_string();
    }
    config.save(client_config_path)?;

    println!("Context \"{}\" created.", name);
    if let Some(server) = server {
        println!("  Server: {}", server);
    }
    Ok(())
}

pub fn list(client_config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(client_config_path)?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("Run: mecanaut context create <name> --server <url>");
        return Ok(());
    }

    println!("{:2} {:20} {:50} {:16}", "", "NAME", "SERVER", "USER");
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context { "*" } else { " " };
        let server = if ctx.server.is_empty() { "(default)" } else { &ctx.server };
        let user = match (&ctx.user, ctx.token.is_empty()) {
            (_, true) => "-",
            (Some(user), false) => user.username.as_str(),
            (None, false) => "(token)",
        };
        println!("{:2} {:20} {:50} {:16}", marker, ctx.name, server, user);
    }
    Ok(())
}

/// Switch current context.
pub fn use_context(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if config.find(name).is_none() {
        anyhow::bail!(
            "Context \"{}\" not found. Run `mecanaut context list` to see available contexts.",
            name
        );
    }

    config.current_context = name.to_string();
    config.save(client_config_path)?;
    println!("Switched to context \"{}\".", name);
    Ok(())
}

/// Set properties on a context. Changing the server drops the session.
pub fn set(name: &str, server: Option<&str>, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    let ctx = config
        .get_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Context \"{}\" not found.", name))?;

    if let Some(s) = server {
        if ctx.server != s {
            ctx.server = s.to_string();
            ctx.token.clear();
            ctx.user = None;
        }
    }

    config.save(client_config_path)?;
    println!("Context \"{}\" updated.", name);
    Ok(())
}

pub fn delete(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if !config.remove_context(name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }

    config.save(client_config_path)?;
    println!("Context \"{}\" deleted.", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_context_becomes_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        create("north", Some("http://localhost:5128/api/v1"), &path).unwrap();
        create("south", None, &path).unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.current_context, "north");
        assert_eq!(config.contexts.len(), 2);
        assert!(create("north", None, &path).is_err());
    }

    #[test]
    fn changing_server_drops_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        create("north", Some("http://a/api/v1"), &path).unwrap();

        let mut config = ClientConfig::load(&path).unwrap();
        config.get_mut("north").unwrap().token = "t".into();
        config.save(&path).unwrap();

        set("north", Some("http://b/api/v1"), &path).unwrap();
        let config = ClientConfig::load(&path).unwrap();
        let ctx = config.current().unwrap();
        assert_eq!(ctx.server, "http://b/api/v1");
        assert!(ctx.token.is_empty());
    }

    #[test]
    fn use_unknown_context_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(use_context("nope", &path).is_err());
        assert!(delete("nope", &path).is_err());
    }
}
