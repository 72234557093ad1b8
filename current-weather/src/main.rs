//! Binary crate for the `current-weather` service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Serving the forecast summary over HTTP
//! - Interactive configuration

use clap::Parser;

mod cli;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
