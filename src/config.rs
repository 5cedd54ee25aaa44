use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::{Cli, VerbosityLevel};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot find input file")]
    InputNotFound { path: PathBuf },

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Startup configuration, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Dataset file, re-read on every request
    pub input: PathBuf,
    pub host: String,
    pub port: u16,
    pub verbosity: VerbosityLevel,
    pub log_filter: Option<String>,
}

impl ServerConfig {
    pub fn new(input: impl Into<PathBuf>, host: impl Into<String>, port: u16) -> Self {
        Self {
            input: input.into(),
            host: host.into(),
            port,
            verbosity: VerbosityLevel::default(),
            log_filter: None,
        }
    }

    /// Build the configuration from parsed arguments.
    ///
    /// The input file is checked once here and never again.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::ensure_input_exists(&cli.input)?;

        Ok(Self {
            input: cli.input.clone(),
            host: cli.host.clone(),
            port: cli.port,
            verbosity: cli.verbosity(),
            log_filter: cli.log_filter.clone(),
        })
    }

    pub fn ensure_input_exists(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(ConfigError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
    }

    /// `host:port`, suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Filter directive for the log subscriber
    pub fn log_directive(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or_else(|| self.verbosity.filter_directive())
    }
}
