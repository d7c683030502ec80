use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// How the terminal view draws the cube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Paint each sticker letter in its color.
    pub colored: bool,
    /// Printed when a turn brings the cube back to solved.
    pub solved_message: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            colored: true,
            solved_message: "Cube is solved!".to_owned(),
        }
    }
}

/// `<config dir>/twisty/config.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("twisty").join("config.toml"))
}

/// Load the view configuration.
///
/// An explicitly given file must exist. The default file is optional and its
/// absence yields the default configuration.
pub fn load(explicit: Option<&Path>) -> color_eyre::Result<ViewConfig> {
    let path = match explicit {
        Some(path) => path.to_owned(),
        None => match default_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No configuration file found, using defaults");
                return Ok(ViewConfig::default());
            }
        },
    };

    let text = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
    let config = parse(&text)
        .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn parse(text: &str) -> Result<ViewConfig, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = parse("colored = false").unwrap();
        assert_eq!(
            config,
            ViewConfig {
                colored: false,
                ..ViewConfig::default()
            }
        );
        assert_eq!(parse("").unwrap(), ViewConfig::default());
    }

    #[test]
    fn unknown_value_types_are_rejected() {
        assert!(parse("colored = \"yes\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }
}
