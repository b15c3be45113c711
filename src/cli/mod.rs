//! Command-line interface for mood-minder.
//!
//! This module provides CLI commands for requesting recommendations and for
//! inspecting the feature estimator, preset table and configuration.

mod commands;

pub use commands::{Cli, run_command};
