pub mod context;
pub mod login;
pub mod resource;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use mecanaut_client::guard::{require_auth, GuardOutcome};
use mecanaut_client::{ApiClient, ApiConfig, ApiError};

use crate::config::{ClientConfig, Context};
use crate::session::{FileSession, TerminalNavigator};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

impl Output {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "table" => Ok(Output::Table),
            "json" => Ok(Output::Json),
            other => anyhow::bail!("Unknown output format \"{}\". Use table or json.", other),
        }
    }
}

/// Build an [`ApiClient`] for the current context.
pub fn connect(client_config_path: &Path) -> Result<(Context, Arc<ApiClient>)> {
    let config = ClientConfig::load(client_config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context. Run `mecanaut use context <name>`."))?
        .clone();

    let mut api = ApiConfig::from_env();
    if !ctx.server.is_empty() {
        api = ApiConfig {
            base_url: ApiConfig::new(ctx.server.as_str()).base_url,
            ..api
        };
    }

    let session = Arc::new(FileSession::new(client_config_path.to_path_buf(), &ctx));
    let client = ApiClient::new(api, session, Arc::new(TerminalNavigator)).map_err(api_error)?;
    Ok((ctx, Arc::new(client)))
}

/// Like [`connect`], but refuses to run without a stored session.
pub fn connect_authenticated(client_config_path: &Path) -> Result<(Context, Arc<ApiClient>)> {
    let (ctx, client) = connect(client_config_path)?;
    match require_auth(client.session().as_ref(), client.config()) {
        GuardOutcome::Proceed => Ok((ctx, client)),
        GuardOutcome::Redirect(_) => anyhow::bail!(
            "Not logged in to context \"{}\". Run `mecanaut login` first.",
            ctx.name
        ),
    }
}

/// Surface the display message; the code goes to the debug log.
pub fn api_error(err: ApiError) -> anyhow::Error {
    tracing::debug!(
        code = err.error_code(),
        status = ?err.status(),
        error = %err,
        "api call failed"
    );
    anyhow::anyhow!("{}", err.user_message())
}
