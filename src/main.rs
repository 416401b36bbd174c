use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod agent;
mod cli;
mod config;
mod engine;
mod error;
mod flows;
mod itinerary;
mod store;
mod timeline;
mod trip;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("tripflow=debug")
    } else {
        EnvFilter::new("tripflow=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Plan(args) => cli::plan::execute(args).await,
        Commands::Parse(args) => cli::parse::execute(args),
        Commands::Profile(args) => cli::profile::execute(args),
        Commands::Show(args) => cli::show::execute(args),
        Commands::Init(args) => cli::init::execute(args),
    }
}
