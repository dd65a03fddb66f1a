//! TOML config loading: read from an explicit path or the platform default.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use vitrine_common::{Color, ConfigError};

use super::schema::VitrineConfig;
use super::template::default_config_toml;

/// Load config from an override path if given, otherwise from the
/// platform default path.
///
/// On macOS the default is `~/Library/Application Support/vitrine/config.toml`,
/// on Linux `~/.config/vitrine/config.toml`. A missing default file is
/// created from the commented template and defaults are returned.
pub fn load_config(override_path: Option<&Path>) -> Result<VitrineConfig, ConfigError> {
    if let Some(path) = override_path {
        return load_from_path(path);
    }

    let path = default_config_path()?;
    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(VitrineConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; problems are logged and the
/// parsed config is returned as-is.
fn load_from_path(path: &Path) -> Result<VitrineConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: VitrineConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    for problem in validate(&config) {
        warn!("config validation warning: {problem}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Get the platform-specific default config file path.
fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("vitrine").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Collect non-fatal problems with a parsed config.
fn validate(config: &VitrineConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if config.window.width == 0 || config.window.height == 0 {
        problems.push(format!(
            "window size {}x{} is not usable",
            config.window.width, config.window.height
        ));
    }
    if !(1..=240).contains(&config.engine.frame_rate) {
        problems.push(format!(
            "frame_rate {} is outside 1-240",
            config.engine.frame_rate
        ));
    }
    if Color::from_hex(&config.window.background).is_none() {
        problems.push(format!(
            "background {:?} is not a #rrggbb color",
            config.window.background
        ));
    }
    for (i, view) in config.views.iter().enumerate() {
        if !view.viewport.is_valid() {
            problems.push(format!(
                "views[{i}] viewport does not fit the unit square"
            ));
        }
    }

    problems
}

// =============================================================================
// Tests
// =============================================================================
