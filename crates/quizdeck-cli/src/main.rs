//! quizdeck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Terminal quiz presenter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz interactively
    Play {
        /// Catalog file of the quiz to start with (default: first in catalog)
        #[arg(long)]
        quiz: Option<String>,

        /// Quiz directory or http(s) base URL (overrides config)
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the quizzes in the catalog
    List {
        /// Quiz directory or http(s) base URL (overrides config)
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load the catalog and every quiz, reporting problems
    Validate {
        /// Quiz directory or http(s) base URL (overrides config)
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample quiz directory
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdeck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            quiz,
            source,
            config,
        } => commands::play::execute(quiz, source, config).await,
        Commands::List { source, config } => commands::list::execute(source, config).await,
        Commands::Validate { source, config } => {
            commands::validate::execute(source, config).await
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
