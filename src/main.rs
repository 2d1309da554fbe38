use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ghissues::github::{GithubClient, RepoId};
use ghissues::util::config::AppConfig;
use ghissues::{app, util};

#[derive(Parser, Debug)]
#[command(name = "ghissues", version, about = "Browse a GitHub repository's issues")]
struct Cli {
    /// Repository to browse, as OWNER/NAME
    repo: RepoId,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the GitHub REST API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.github.api_url = api_url;
    }

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!(repo = %cli.repo, api_url = %config.github.api_url, "ghissues starting");

    let client = GithubClient::new(&config.github.api_url, config.github.timeout())?;

    app::event_loop::run(config, client, cli.repo).await
}

fn setup_logging(
    config: &util::config::AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghissues.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghissues=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
