//! Melting Snowman - word-guessing game server.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use melting_snowman::{ApiState, SessionRegistry, api};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => run_http_server(host, port).await,
    }
}

/// Run the HTTP game server
async fn run_http_server(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Melting Snowman game server");

    let registry = Arc::new(SessionRegistry::new());
    let app = api::router(ApiState::new(registry));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(%host, port, "Server ready");
    axum::serve(listener, app).await?;

    Ok(())
}
