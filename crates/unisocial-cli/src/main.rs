use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use unisocial_core::scenario::Category;

mod commands;

#[derive(Parser)]
#[command(name = "unisocial")]
#[command(about = "UniSocial - practice social conversations against an AI role-play partner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in scenarios
    Scenarios {
        /// Only show one category (dorm, academic, romance, career, social, interpersonal)
        #[arg(long, value_parser = commands::catalog::parse_category)]
        category: Option<Category>,
    },
    /// Show learning objectives
    Objectives {
        #[arg(long, value_parser = commands::catalog::parse_category)]
        category: Option<Category>,
    },
    /// Start a role-play session
    Play {
        /// Scenario id, e.g. `social_party`
        scenario_id: String,

        #[arg(long, value_enum, default_value_t = Backend::Server)]
        backend: Backend,

        /// Base URL of a running unisocial-server (defaults to `server.bind` from config)
        #[arg(long)]
        server_url: Option<String>,

        /// Path to config.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Where replies and analyses come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// A running unisocial-server
    Server,
    /// Gemini, called in-process (needs GEMINI_API_KEY)
    Direct,
    /// Canned responses, no network
    Offline,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scenarios { category } => commands::catalog::list_scenarios(category),
        Commands::Objectives { category } => commands::catalog::list_objectives(category),
        Commands::Play {
            scenario_id,
            backend,
            server_url,
            config,
        } => {
            commands::play::run(commands::play::PlayOptions {
                scenario_id,
                backend,
                server_url,
                config,
            })
            .await?
        }
    }

    Ok(())
}
