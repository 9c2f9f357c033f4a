//! Jotter CLI: the main entry point.
//!
//! Commands:
//! - `serve`   Start the HTTP gateway and web client
//! - `chat`    Interactive or single-message terminal chat
//! - `models`  List Gemini models usable for chat
//! - `status`  Show effective configuration
//! - `init`    Write the default config file

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "jotter",
    about = "Jotter: a chat-based journaling assistant",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway and web client
    Serve {
        /// Override the bind address
        #[arg(long)]
        host: Option<String>,

        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Chat with the journal assistant in the terminal
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List models that support content generation
    Models,

    /// Show effective configuration
    Status,

    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { host, port } => commands::serve::run(host, port).await?,
        Commands::Chat { message } => commands::chat::run(message).await?,
        Commands::Models => commands::models::run().await?,
        Commands::Status => commands::status::run().await?,
        Commands::Init { force } => commands::init::run(force).await?,
    }

    Ok(())
}
