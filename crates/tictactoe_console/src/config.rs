//! Console configuration.

use crate::names::parse_name;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Name for the player using X when none is given on the command line.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Name for the player using O when none is given on the command line.
    #[serde(default = "default_player_o")]
    player_o: String,
}

fn default_player_x() -> String {
    "Player 1".to_string()
}

fn default_player_o() -> String {
    "Player 2".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults. Names are trimmed and
    /// must not be blank.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        let config = config.validated()?;
        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, else `tictactoe.toml` if it exists, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let player_x = parse_name(&self.player_x)
            .map_err(|e| ConfigError::new(format!("player_x: {}", e)))?;
        let player_o = parse_name(&self.player_o)
            .map_err(|e| ConfigError::new(format!("player_o: {}", e)))?;
        Ok(Self { player_x, player_o })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.player_x(), "Player 1");
        assert_eq!(config.player_o(), "Player 2");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ConsoleConfig::from_toml("player_o = \"Grace\"").unwrap();
        assert_eq!(config.player_x(), "Player 1");
        assert_eq!(config.player_o(), "Grace");
    }

    #[test]
    fn test_names_are_trimmed() {
        let config = ConsoleConfig::from_toml("player_x = \"  Ada  \"").unwrap();
        assert_eq!(config.player_x(), "Ada");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = ConsoleConfig::from_toml("player_x = \"   \"").unwrap_err();
        assert!(err.message.contains("player_x"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = ConsoleConfig::from_toml("player_x = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_x = \"Ada\"\nplayer_o = \"Grace\"").unwrap();

        let config = ConsoleConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.player_x(), "Ada");
        assert_eq!(config.player_o(), "Grace");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.to_string().contains("config.rs"));
    }
}
