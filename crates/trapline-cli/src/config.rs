//! The `trapline` configuration file.
//!
//! Settings resolve once at startup: command-line flag or environment
//! variable first, then the TOML file, then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trapline_client::DEFAULT_BACKEND_URL;
use trapline_core::{Error, Result};

/// Default web listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraplineConfig {
    /// Backend base URL
    pub backend_url: String,
    /// Address `trapline serve` binds
    pub listen_addr: String,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for TraplineConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TraplineConfig {
    /// `<config dir>/trapline/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trapline").join("config.toml"))
    }

    /// The explicit path if given, otherwise the default location.
    pub fn resolve_path(explicit: Option<&str>) -> Option<PathBuf> {
        explicit.map(PathBuf::from).or_else(Self::default_path)
    }

    /// Loads the file at `explicit`, or the default file if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(Path::new(path)),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses one file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parses TOML text; absent keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Applies command-line (or environment) values over file values.
    pub fn with_overrides(mut self, backend_url: Option<String>, listen_addr: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        if let Some(addr) = listen_addr {
            self.listen_addr = addr;
        }
        self
    }
}
