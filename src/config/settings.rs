//! User settings for the terminal keypad
//!
//! Settings come from an optional TOML file under the platform config
//! directory. Aliases declared there are validated against the keypad
//! operation table before they reach the keymap, so a typo in the
//! config surfaces at startup instead of as dead keys.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::operations;
use crate::input::keymap::Keymap;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config file {path} is not valid TOML: {source}")]
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("alias key {key:?} must be a single character")]
    AliasKeyNotSingleChar { key: String },
    #[error("alias {key:?} targets unknown symbol {symbol:?} (expected one of: {expected})")]
    UnknownAliasTarget {
        key: String,
        symbol: String,
        expected: String,
    },
}

/// Settings loaded from the user's config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Extra keymap aliases: single character → keypad symbol
    pub aliases: HashMap<String, String>,
    /// Append the engine state to the interactive prompt
    pub show_state: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aliases: HashMap::new(),
            show_state: false,
        }
    }
}

impl Settings {
    /// Default config path under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tactile-calc").join("config.toml"))
    }

    /// Loads settings from `path`
    ///
    /// A missing file is not an error; it yields the defaults so a
    /// fresh install runs without any setup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml(&raw, path)
    }

    /// Parses and validates settings from TOML text
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(raw).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects aliases the keymap could not apply
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, symbol) in &self.aliases {
            let mut chars = key.chars();
            let (Some(_), None) = (chars.next(), chars.next()) else {
                return Err(ConfigError::AliasKeyNotSingleChar { key: key.clone() });
            };

            if operations::lookup(symbol).is_none() {
                return Err(ConfigError::UnknownAliasTarget {
                    key: key.clone(),
                    symbol: symbol.clone(),
                    expected: operations::SYMBOLS.join(", "),
                });
            }
        }

        Ok(())
    }

    /// Builds the runtime keymap: built-in aliases plus user overrides
    pub fn build_keymap(&self) -> Keymap {
        let mut keymap = Keymap::new();
        for (key, symbol) in &self.aliases {
            if let Some(ch) = key.chars().next() {
                keymap.insert_alias(ch, symbol);
            }
        }

        keymap
    }
}
