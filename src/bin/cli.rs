//! toolscope CLI
//!
//! Runs the API server with its news poller, or one-off maintenance commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use toolscope::{
    config::{load_all, load_config},
    error::Result,
    pipeline,
    services::SortKey,
};

/// toolscope - AI tool reviews and news feed service
#[derive(Parser, Debug)]
#[command(
    name = "toolscope",
    version,
    about = "News feed and tool catalog service"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the API and refresh the news feed in the background
    Serve {
        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Fetch and clean the news feed once, printing the result as JSON
    Fetch,

    /// List catalog tools with their star ratings
    Tools {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,

        /// Sort order: rating or price
        #[arg(long, default_value = "rating")]
        sort: SortKey,
    },

    /// Validate configuration and catalog files
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Serve { port } => {
            let (mut config, catalog) = load_all(&cli.config)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            log::info!(
                "toolscope starting with {} tool(s) in the catalog",
                catalog.len()
            );
            pipeline::run_server(&config, catalog).await?;
        }

        Command::Fetch => {
            let config = load_config(&cli.config)?;
            let items = pipeline::run_fetch(&config).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }

        Command::Tools { category, sort } => {
            let (_, catalog) = load_all(&cli.config)?;
            for line in pipeline::run_tools(&catalog, category.as_deref(), sort) {
                println!("{line}");
            }
        }

        Command::Validate => pipeline::run_validate(&cli.config)?,
    }

    Ok(())
}
