/// Structured error types for cms-core.
///
/// Library crates return these; the `cms` binary wraps them in `anyhow`
/// and decides whether a failure ends the process.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading failed
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The dotenv file is missing or unreadable
    #[error("Error loading .env file {path:?}")]
    EnvFileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dotenv file contains a line dotenvy cannot parse
    #[error("Error loading .env file {path:?}")]
    EnvFileParse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Result type alias for cms-core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create an env file error with the offending path
    pub fn env_file(path: impl Into<PathBuf>, source: dotenvy::Error) -> Self {
        let path = path.into();
        match source {
            dotenvy::Error::Io(source) => Self::EnvFileIo { path, source },
            source => Self::EnvFileParse { path, source },
        }
    }

    /// Path of the configuration file that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::EnvFileIo { path, .. } | Self::EnvFileParse { path, .. } => path,
        }
    }
}
