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

/// User preferences for `mantree`. Every field is optional in the file;
/// command line flags take precedence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fail on requests the interpreter does not know.
    pub strict: bool,
    /// Lay pages out for nroff (terminal) rather than troff.
    pub nroff: bool,
    /// manpath configuration listing system man directories.
    pub manpath_config: PathBuf,
    /// Searched before the directories from `manpath_config`.
    pub extra_manpath: Vec<PathBuf>,
    pub default_section: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            nroff: false,
            manpath_config: PathBuf::from("/etc/manpath.config"),
            extra_manpath: Vec::new(),
            default_section: 1,
        }
    }
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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.manpath_config =
            Self::expand_path(&config.manpath_config).unwrap_or(config.manpath_config);
        config.extra_manpath = config
            .extra_manpath
            .into_iter()
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir))
            .collect();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mantree");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
