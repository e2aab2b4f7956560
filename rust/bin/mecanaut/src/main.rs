//! `mecanaut`: command-line client for the Mecanaut maintenance backend.
//!
//! Manages contexts, the signed-in session, and resource operations.

mod commands;
mod config;
mod session;

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::resource::Filters;
use crate::commands::Output;

/// Mecanaut CLI tool.
#[derive(Parser, Debug)]
#[command(name = "mecanaut", about = "Mecanaut CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.mecanaut/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage contexts.
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// Sign in to the current context's backend.
    Login {
        #[arg(long)]
        user: Option<String>,
        /// Password (prompted when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// Register a tenant and its first user from a JSON file.
    Register {
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
    },

    /// Clear the session of the current context.
    Logout,

    /// Show the signed-in user.
    Whoami,

    /// Get resource(s).
    Get {
        /// Resource type (e.g. plants, machines, work-orders).
        resource: String,
        /// Optional resource ID for single get.
        id: Option<i64>,
        /// Filter by plant.
        #[arg(long)]
        plant: Option<i64>,
        /// Filter by production line.
        #[arg(long)]
        line: Option<i64>,
    },

    /// Create a resource.
    Create {
        resource: String,
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },

    /// Update a resource.
    Update {
        resource: String,
        id: i64,
        /// JSON body.
        #[arg(long = "json")]
        json_body: String,
    },

    /// Delete a resource.
    Delete {
        resource: String,
        id: i64,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Upload an image and print its URL.
    Upload { file: PathBuf },

    /// Check backend status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Create a new context.
    Create {
        name: String,
        /// Backend origin including /api/v1.
        #[arg(long)]
        server: Option<String>,
    },
    /// List all contexts.
    List,
    /// Set properties on a context.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let output = Output::parse(&cli.output)?;

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Create { name, server } => {
                commands::context::create(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set { name, server } => {
                commands::context::set(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Login { user, password } => {
            let username = match user {
                Some(user) => user,
                None => prompt("Username: ")?,
            };
            let password = match password {
                Some(password) => password,
                None => rpassword::prompt_password("Password: ")?,
            };
            commands::login::login(&username, &password, &config_path).await?;
        }

        Commands::Register { file } => {
            let body = std::fs::read_to_string(&file)?;
            commands::login::register(&body, &config_path).await?;
        }

        Commands::Logout => {
            commands::login::logout(&config_path)?;
        }

        Commands::Whoami => {
            commands::login::whoami(&config_path)?;
        }

        Commands::Get { resource, id, plant, line } => {
            let filters = Filters { plant, line };
            commands::resource::get(&resource, id, filters, output, &config_path).await?;
        }

        Commands::Create { resource, json_body, file } => {
            let body = if let Some(path) = file {
                std::fs::read_to_string(&path)?
            } else if let Some(json) = json_body {
                json
            } else {
                anyhow::bail!("Provide --json or -f <file>.");
            };
            commands::resource::create(&resource, &body, output, &config_path).await?;
        }

        Commands::Update { resource, id, json_body } => {
            commands::resource::update(&resource, id, &json_body, output, &config_path).await?;
        }

        Commands::Delete { resource, id, yes } => {
            if !yes && !prompt("Are you sure? [y/N]: ")?.eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
            commands::resource::delete(&resource, id, &config_path).await?;
        }

        Commands::Upload { file } => {
            commands::resource::upload(&file, &config_path).await?;
        }

        Commands::Status => {
            commands::resource::status(&config_path).await?;
        }

        Commands::Version => {
            println!("mecanaut cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Read one trimmed line from stdin after printing `label` to stderr.
fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{}", label);
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
