//! CLI entry point for the labyrinth generator

use clap::Parser;
use labyrinth::io::cli::{Cli, LabyrinthRunner};
use labyrinth::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> labyrinth::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    LabyrinthRunner::new(cli).run().map(|_| ())
}
