//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `recommend`: Live (or placeholder) recommendations for a seed track
//! - `inspect`: Feature estimates, the preset table, the placeholder list
//! - `settings`: Config file location, contents and initialization

mod inspect;
mod recommend;
mod settings;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::error::{self, Error};
use crate::recommend::MoodSettings;

pub use inspect::{cmd_estimate, cmd_fallback, cmd_presets};
pub use recommend::cmd_recommend;
pub use settings::{cmd_config_init, cmd_config_path, cmd_config_show};

/// Mood Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Recommend tracks matching a mood, seeded from one track
    Recommend {
        #[command(flatten)]
        seed: SeedArgs,
        #[command(flatten)]
        mood: MoodArgs,
        /// Catalog access token (or set CATALOG_ACCESS_TOKEN env var)
        #[arg(short, long, env = "CATALOG_ACCESS_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate features for a list of genres
    Estimate {
        /// Genre tag (repeatable)
        #[arg(short, long = "genre", required = true)]
        genres: Vec<String>,
        #[command(flatten)]
        mood: MoodArgs,
    },
    /// Show the genre preset table
    Presets,
    /// Show the placeholder list returned when live data is unavailable
    Fallback {
        #[command(flatten)]
        mood: MoodArgs,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Flags that describe a seed inline
const SEED_FLAGS: [&str; 4] = ["track_id", "track_name", "artist_id", "artist_name"];

/// Seed track, either from a JSON file or from individual flags
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// JSON file with a track object: {id, name, artists: [{id, name}], album: {name}}
    #[arg(long, conflicts_with_all = SEED_FLAGS)]
    pub seed_file: Option<PathBuf>,
    /// Seed track ID
    #[arg(long)]
    pub track_id: Option<String>,
    /// Seed track name
    #[arg(long)]
    pub track_name: Option<String>,
    /// Seed track's primary artist ID
    #[arg(long)]
    pub artist_id: Option<String>,
    /// Seed track's primary artist name
    #[arg(long)]
    pub artist_name: Option<String>,
}

/// Target mood overrides (each in 0.0-1.0)
#[derive(Args, Debug, Clone, Default)]
pub struct MoodArgs {
    /// Target energy
    #[arg(long)]
    pub energy: Option<f64>,
    /// Target danceability
    #[arg(long)]
    pub danceability: Option<f64>,
    /// Target valence (positivity)
    #[arg(long)]
    pub valence: Option<f64>,
}

impl MoodArgs {
    /// Apply overrides on top of `defaults` and check the range.
    pub fn resolve(&self, defaults: MoodSettings) -> error::Result<MoodSettings> {
        let mood = MoodSettings {
            energy: self.energy.unwrap_or(defaults.energy),
            danceability: self.danceability.unwrap_or(defaults.danceability),
            valence: self.valence.unwrap_or(defaults.valence),
        };
        if !mood.is_in_range() {
            return Err(Error::invalid_input(format!(
                "mood values must be between 0 and 1, got {:?}",
                mood
            )));
        }
        Ok(mood)
    }
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli);

    match &cli.command {
        Commands::Recommend {
            seed,
            mood,
            token,
            json,
        } => cmd_recommend(&config, seed, mood, token.as_deref(), *json),
        Commands::Estimate { genres, mood } => cmd_estimate(&config, genres, mood),
        Commands::Presets => cmd_presets(),
        Commands::Fallback { mood, json } => cmd_fallback(&config, mood, *json),
        Commands::Config { action } => match action {
            ConfigAction::Path => cmd_config_path(cli.config.as_deref()),
            ConfigAction::Show => cmd_config_show(&config),
            ConfigAction::Init { force } => cmd_config_init(cli.config.as_deref(), *force),
        },
    }
}

fn load_config(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend_flags() {
        let cli = Cli::try_parse_from([
            "mood-minder",
            "recommend",
            "--track-id",
            "t1",
            "--artist-id",
            "a1",
            "--energy",
            "0.9",
            "--token",
            "tok",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend {
                seed,
                mood,
                token,
                ..
            } => {
                assert_eq!(seed.track_id.as_deref(), Some("t1"));
                assert_eq!(seed.artist_id.as_deref(), Some("a1"));
                assert_eq!(mood.energy, Some(0.9));
                assert_eq!(token.as_deref(), Some("tok"));
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_seed_file_conflicts_with_flags() {
        let result = Cli::try_parse_from([
            "mood-minder",
            "recommend",
            "--seed-file",
            "seed.json",
            "--track-id",
            "t1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mood_overrides_defaults() {
        let args = MoodArgs {
            energy: Some(0.9),
            ..Default::default()
        };
        let mood = args.resolve(MoodSettings::new(0.1, 0.2, 0.3)).unwrap();
        assert_eq!(mood, MoodSettings::new(0.9, 0.2, 0.3));
    }

    #[test]
    fn test_mood_out_of_range_rejected() {
        let args = MoodArgs {
            valence: Some(1.5),
            ..Default::default()
        };
        let err = args.resolve(MoodSettings::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
