// Configuration file loading and creation

use super::types::Config;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("reflex-pong");
    path.push("config.toml");
    path
}

/// Load configuration from `path` (or the default location), creating a
/// default file if none exists yet
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path(),
    };

    if !config_path.exists() {
        create_default_config(&config_path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;

    Ok(parse_config(&contents, &config_path))
}

/// Parse config text, falling back to defaults on malformed TOML
fn parse_config(contents: &str, origin: &Path) -> Config {
    match toml::from_str(contents) {
        Ok(config) => {
            info!(path = %origin.display(), "loaded configuration");
            config
        }
        Err(e) => {
            warn!(path = %origin.display(), error = %e, "config parse failed, using defaults");
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let toml_string =
        toml::to_string_pretty(&Config::default()).context("failed to serialize defaults")?;

    let commented_toml = format!(
        "# Reflex Pong Configuration File\n\
         # Restart the game after editing\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\",\n\
         #                     \"Space\", \"Tab\" or a single character like \"W\"\n\
         #\n\
         # Input sampling: \"per_event\" (key repeat) or \"per_tick\" (held keys)\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "created default config");
    println!("Created default config file at: {}", path.display());
    Ok(())
}
