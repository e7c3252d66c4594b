//! Configuration parsing.
//!
//! Handles the optional greplite.toml file. Unknown keys produce warnings,
//! never errors.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::DEFAULT_RECURSION_LIMIT;
use crate::walker::DEFAULT_MAX_DEPTH;

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

/// Match engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Cap on nested continuation checks (default: 256).
    #[serde(default = "EngineConfig::default_max_recursion")]
    pub max_recursion: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recursion: Self::default_max_recursion(),
        }
    }
}

impl EngineConfig {
    fn default_max_recursion() -> usize {
        DEFAULT_RECURSION_LIMIT
    }
}

/// Directory walking settings for recursive search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalkConfig {
    /// Maximum directory depth (default: 100).
    #[serde(default = "WalkConfig::default_max_depth")]
    pub max_depth: usize,

    /// Also search hidden files and directories.
    #[serde(default)]
    pub hidden: bool,

    /// Honour `.gitignore` files.
    #[serde(default)]
    pub git_ignore: bool,

    #[serde(default)]
    pub follow_links: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            hidden: false,
            git_ignore: false,
            follow_links: false,
        }
    }
}

impl WalkConfig {
    fn default_max_depth() -> usize {
        DEFAULT_MAX_DEPTH
    }
}

/// Multi-file search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Search many files on the rayon pool (default: true).
    #[serde(default = "SearchConfig::default_parallel")]
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: Self::default_parallel(),
        }
    }
}

impl SearchConfig {
    fn default_parallel() -> bool {
        true
    }
}

/// Known keys per section; anything else is warned about and ignored.
const KNOWN_SECTIONS: &[(&str, &[&str])] = &[
    ("engine", &["max_recursion"]),
    ("walk", &["max_depth", "hidden", "git_ignore", "follow_links"]),
    ("search", &["parallel"]),
];

/// Load config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e, path))?;

    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    let config: Config = toml::Value::Table(table)
        .try_into()
        .map_err(|e| config_error(e, path))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Dotted names of every key not in [`KNOWN_SECTIONS`].
fn unknown_keys(table: &toml::Table) -> BTreeSet<String> {
    let mut unknown = BTreeSet::new();
    for (section, value) in table {
        let Some((_, known)) = KNOWN_SECTIONS
            .iter()
            .find(|(name, _)| *name == section.as_str())
        else {
            unknown.insert(section.clone());
            continue;
        };
        if let toml::Value::Table(fields) = value {
            for key in fields.keys() {
                if !known.contains(&key.as_str()) {
                    unknown.insert(format!("{section}.{key}"));
                }
            }
        }
    }
    unknown
}

fn config_error(err: impl std::fmt::Display, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(path = %path.display(), key, "unrecognized config field");
    eprintln!(
        "greplite: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
