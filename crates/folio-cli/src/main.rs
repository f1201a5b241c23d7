use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A developer portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/folio/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site API
    Serve {
        /// Listen host
        #[arg(long)]
        host: Option<String>,
        /// Listen port
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Open the portfolio page
    View,
    /// Send a message through the contact endpoint
    Contact {
        #[arg(short = 'n', long)]
        name: String,
        #[arg(short = 'e', long)]
        email: String,
        #[arg(short = 's', long)]
        subject: Option<String>,
        #[arg(short = 'm', long)]
        message: String,
    },
    /// Download the resume
    Resume {
        /// Target directory (defaults to the configured download directory)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // The page owns the terminal while viewing, so its log goes to a file
    let viewing = matches!(cli.command, Some(Commands::View) | None);
    init_logging(&config, viewing)?;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve::run(Arc::new(config)).await
        }
        Some(Commands::View) | None => commands::run::run(Arc::new(config)).await,
        Some(Commands::Contact {
            name,
            email,
            subject,
            message,
        }) => commands::contact::run(&config, name, email, subject, message).await,
        Some(Commands::Resume { out }) => commands::resume::run(&config, out).await,
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
