mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = ["./stillcast.toml", "~/.config/stillcast/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.output.filename.trim().is_empty() {
        anyhow::bail!("Output filename cannot be empty");
    }

    // Output is always written into the working directory itself
    if Path::new(&config.output.filename).components().count() > 1 {
        anyhow::bail!(
            "Output filename must not contain a path separator: {}",
            config.output.filename
        );
    }

    if config.output.audio_bitrate.trim().is_empty() {
        anyhow::bail!("Audio bitrate cannot be empty");
    }

    if let Some(path) = &config.tools.ffmpeg {
        if !path.exists() {
            tracing::warn!("Configured ffmpeg path does not exist: {:?}", path);
        }
    }

    Ok(())
}
