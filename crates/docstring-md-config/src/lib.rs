use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directories searched for modules after the current directory.
    ///
    /// Entries may use `~`, environment variables and glob patterns.
    pub search_paths: Vec<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docstring-md");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Search paths with shell variables, tildes and globs expanded, in
    /// configured order.
    pub fn resolved_search_paths(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .flat_map(|entry| {
                let expanded = Self::expand_path(Path::new(entry))
                    .unwrap_or_else(|| PathBuf::from(entry));
                Self::expand_glob(&expanded)
            })
            .collect()
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Glob matches in sorted order; plain paths and patterns that match
    /// nothing are kept as written.
    fn expand_glob(path: &Path) -> Vec<PathBuf> {
        let pattern = path.to_string_lossy();
        let mut matches: Vec<PathBuf> = match glob::glob(&pattern) {
            Ok(paths) => paths.filter_map(Result::ok).collect(),
            Err(_) => Vec::new(),
        };
        if matches.is_empty() {
            return vec![path.to_path_buf()];
        }
        matches.sort();
        matches
    }
}
