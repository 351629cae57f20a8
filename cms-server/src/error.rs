//! Error types for cms-server

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Startup and serving failures.
///
/// Every variant is fatal for the process; the `cms` binary logs it and exits.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] cms_core::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
