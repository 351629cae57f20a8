//! cms-core: configuration loading for the cms backend
//!
//! Reads database credentials and other settings from a dotenv file.

pub mod env;
pub mod error;

pub use env::{env_file_path, load_env_variable, load_env_variables, EnvFile};
pub use error::{ConfigError, Result};
