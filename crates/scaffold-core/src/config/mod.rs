//! Runtime configuration shared by the desktop app and the CLI.
//!
//! Values come from built-in defaults, overridden by `SCAFFOLD_*` environment
//! variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_DB_FILE_NAME: &str = "demo-notes.sqlite";
pub const DEFAULT_TCP_HOST: &str = "127.0.0.1";
pub const DEFAULT_TCP_PORT: u16 = 5555;

const ENV_DATA_DIR: &str = "SCAFFOLD_DATA_DIR";
const ENV_DB_FILE: &str = "SCAFFOLD_DB_FILE";
const ENV_TCP_HOST: &str = "SCAFFOLD_TCP_HOST";
const ENV_TCP_PORT: &str = "SCAFFOLD_TCP_PORT";

/// Where the TCP demo listener binds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TcpDemoConfig {
    pub host: String,
    pub port: u16,
}

impl Default for TcpDemoConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_TCP_HOST.to_string(),
            port: DEFAULT_TCP_PORT,
        }
    }
}

impl TcpDemoConfig {
    /// `host:port` for display and error messages
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Private application data directory
    pub data_dir: PathBuf,
    /// Note store file name inside `data_dir`
    pub db_file_name: String,
    #[serde(default)]
    pub tcp: TcpDemoConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_dir(default_data_dir())
    }
}

impl AppConfig {
    /// Defaults rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            tcp: TcpDemoConfig::default(),
        }
    }

    /// Defaults overridden by `SCAFFOLD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(dir) = get(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = get(ENV_DB_FILE) {
            config.db_file_name = file;
        }
        if let Some(host) = get(ENV_TCP_HOST) {
            config.tcp.host = host;
        }
        if let Some(port) = get(ENV_TCP_PORT) {
            config.tcp.port = port
                .parse()
                .map_err(|_| Error::InvalidInput(format!("{ENV_TCP_PORT}={port} is not a port")))?;
        }

        Ok(config)
    }

    /// Full path of the note store file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }
}

/// Platform data directory for Scaffold, falling back to the working directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scaffold")
}
