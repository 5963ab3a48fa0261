//! Frontend configuration.
//!
//! Loaded from `tally/config.toml` under the user config directory. Every
//! table and field is optional; a missing file or field falls back to the
//! defaults. The state machine itself has no knobs, so only frontend
//! concerns live here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level frontend configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub keys: KeyBindings,
    pub display: DisplayOptions,
}

/// Control-key bindings layered over the printable keypad characters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    /// Clears all state (the AC button).
    pub clear: char,
    /// Deletes the last typed character (besides Backspace).
    pub delete: char,
    /// Computes the pending operation (besides Enter).
    pub equals: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            clear: 'c',
            delete: 'x',
            equals: '=',
        }
    }
}

/// Display-region rendering options.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayOptions {
    /// Separator used to group integer digits in threes.
    pub group_separator: char,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            group_separator: ',',
        }
    }
}

impl Config {
    /// Load the config from `path`, or from the default location when
    /// `path` is `None`. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Default config file location under the user config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.keys.clear, 'c');
        assert_eq!(config.keys.delete, 'x');
        assert_eq!(config.keys.equals, '=');
        assert_eq!(config.display.group_separator, ',');
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [keys]
            clear = "k"

            [display]
            group_separator = "."
            "#,
        )
        .unwrap();
        assert_eq!(config.keys.clear, 'k');
        assert_eq!(config.keys.delete, 'x');
        assert_eq!(config.display.group_separator, '.');
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<Config>("[keys]\nquit = \"q\"\n").is_err());
    }

    #[test]
    fn test_load_error_names_the_path() {
        let dir = std::env::temp_dir().join("tally-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(&path, "keys = 1").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
