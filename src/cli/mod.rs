use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// TSP Topic Manager - admits Tempo Song Protocol advertisements
#[derive(Parser)]
#[command(name = "tsp-topic-manager")]
#[command(about = "TSP Topic Manager - admits Tempo Song Protocol advertisements")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Identify admissible TSP outputs in a raw transaction
    Admit(commands::admit::AdmitCommand),
    /// Decode a PushDrop locking script and show its TSP fields
    Inspect(commands::inspect::InspectCommand),
    /// Print the topic documentation
    Docs(commands::docs::DocsCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admit(command) => command.run(),
        Commands::Inspect(command) => command.run(),
        Commands::Docs(command) => command.run(),
    }
}
