use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use parlor_core::config::ChatConfig;
use parlor_core::session::ChatSession;
use parlor_interaction::HttpBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

#[derive(Parser)]
#[command(name = "parlor")]
#[command(about = "Parlor - terminal chat client for a question/answer backend", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Initially selected endpoint path (overrides config)
    #[arg(long)]
    path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ChatConfig::load(cli.config.as_deref())?;
    apply_overrides(&mut config, cli.base_url, cli.path);
    info!(
        base_url = %config.base_url,
        path = %config.default_path,
        "configuration loaded"
    );

    let backend = Arc::new(HttpBackend::new(config.base_url.clone()));
    let session = Arc::new(ChatSession::new(backend, config.default_path.clone()));

    repl::run(session, &config).await
}

/// Applies command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut ChatConfig, base_url: Option<String>, path: Option<String>) {
    if let Some(base_url) = base_url {
        info!(base_url = %base_url, "base URL overridden from the command line");
        config.base_url = base_url;
    }
    if let Some(path) = path {
        info!(path = %path, "default endpoint overridden from the command line");
        config.default_path = path;
    }
}
