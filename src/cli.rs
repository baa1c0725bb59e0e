//! Command-line interface for the melting snowman server.

use clap::{Parser, Subcommand};

/// Melting Snowman - word-guessing game server
#[derive(Parser, Debug)]
#[command(name = "melting_snowman")]
#[command(about = "HTTP word-guessing game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
