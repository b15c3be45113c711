//! Config file commands.

use std::path::Path;

use crate::config::{self, Config};

/// Print where the config file lives
pub fn cmd_config_path(override_path: Option<&Path>) -> anyhow::Result<()> {
    match override_path.map(Path::to_path_buf).or_else(config::config_path) {
        Some(path) => println!("{}", path.display()),
        None => println!("Could not determine config directory"),
    }
    Ok(())
}

/// Print the effective configuration with the token redacted
pub fn cmd_config_show(config: &Config) -> anyhow::Result<()> {
    let mut shown = config.clone();
    if shown.credentials.access_token.is_some() {
        shown.credentials.access_token = Some("<redacted>".to_string());
    }
    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}

/// Write a default config file
pub fn cmd_config_init(override_path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => config::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    config::save_to(&Config::default(), &path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
