// xtask - Developer tasks for the Swag Labs suite
//
//   cargo run -p xtask -- auth-setup [--output PATH] [--local]
//   cargo run -p xtask -- serve [--port N]

use anyhow::Context;
use clap::{Parser, Subcommand};
use sauce_pages::fixtures::{self, Credentials};
use sauce_pages::{BrowserSession, SuiteConfig, flows};
use sauce_replica::ReplicaServer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask", about = "Developer tasks for the Swag Labs end-to-end suite")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in once and save the browser storage state for reuse by tests
    AuthSetup {
        /// Where to write the storage state (default: $SAUCE_STORAGE_STATE)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Capture against a throwaway local replica instead of $SAUCE_BASE_URL
        #[arg(long)]
        local: bool,
    },
    /// Serve the storefront replica until interrupted
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::AuthSetup { output, local } => auth_setup(output, local).await,
        Command::Serve { port } => serve(port).await,
    }
}

async fn auth_setup(output: Option<PathBuf>, local: bool) -> anyhow::Result<()> {
    let mut config = SuiteConfig::from_env().context("Invalid suite configuration")?;

    let replica = if local {
        let replica = ReplicaServer::start()
            .await
            .context("Failed to start storefront replica")?;
        config = config.with_base_url(&replica.url())?;
        Some(replica)
    } else {
        None
    };

    let path = output.unwrap_or_else(|| config.storage_state().to_path_buf());
    let credentials = match (config.username(), config.password()) {
        (Some(username), Some(password)) => Credentials::new(username, password),
        _ => {
            tracing::info!("SAUCE_USERNAME/SAUCE_PASSWORD not set, using standard_user");
            fixtures::valid_user()
        }
    };

    tracing::info!("Capturing session for {} at {}", config.base_url(), path.display());
    let session = BrowserSession::launch(config).await?;
    let result = flows::capture_authenticated_state(&session, &credentials, &path).await;
    let closed = session.close().await;
    if let Some(replica) = replica {
        replica.shutdown();
    }

    let state = result.context("Failed to capture authenticated state")?;
    closed.context("Failed to close browser session")?;
    println!(
        "Saved {} cookies and {} origins to {}",
        state.cookies.len(),
        state.origins.len(),
        path.display()
    );
    Ok(())
}

async fn serve(port: u16) -> anyhow::Result<()> {
    let server = ReplicaServer::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    println!("Swag Labs replica at {} (Ctrl-C to stop)", server.url());

    tokio::signal::ctrl_c().await?;
    server.shutdown();
    Ok(())
}
