//! CLI frontend for the Gatewalk scene engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gw",
    about = "Gatewalk: play and check branching scene adventures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure interactively on stdin
    Play {
        /// Scene catalog JSON file (default: the bundled adventure)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Name the narrator greets you by
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Validate a scene catalog and report unreachable scenes
    Check {
        /// Scene catalog JSON file (default: the bundled adventure)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// List the scenes of a catalog and where their choices lead
    Scenes {
        /// Scene catalog JSON file (default: the bundled adventure)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { catalog, name } => {
            commands::play::run(catalog.as_deref(), name.as_deref())
        }
        Commands::Check { catalog } => commands::check::run(catalog.as_deref()),
        Commands::Scenes { catalog } => commands::scenes::run(catalog.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
