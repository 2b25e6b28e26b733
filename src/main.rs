mod cli;
mod config;
mod generate;
mod github;
mod render;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let _cli = cli::Cli::parse();

    if let Err(err) = generate::run() {
        error!("{err:#}");
        std::process::exit(generate::exit_code(&err));
    }
}
