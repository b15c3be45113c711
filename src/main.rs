//! Mood Minder - mood-matched track recommendations.
//!
//! Given one seed track and a target mood (energy, danceability, valence),
//! collects candidates from the music catalog, estimates their features from
//! artist genres, and ranks them by distance to the mood.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod recommend;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("mood_minder=info".parse()?))
        .init();

    cli::run_command(&args)
}
