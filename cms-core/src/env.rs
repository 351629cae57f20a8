//! Environment loading from a dotenv file
//!
//! Values resolve the way dotenv files usually behave: a variable already
//! set in the process environment wins over the file, and a key that is
//! in neither resolves to the empty string. Only a file that cannot be
//! read or parsed is an error.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Process variable that overrides the configuration file location
pub const ENV_FILE_VAR: &str = "CMS_ENV_FILE";

/// Configuration file used when `CMS_ENV_FILE` is not set.
/// The backend runs from `backend/` and reads the repository-root `.env`.
pub const DEFAULT_ENV_FILE: &str = "../.env";

/// Location of the configuration file (`CMS_ENV_FILE` or `../.env`)
pub fn env_file_path() -> PathBuf {
    resolve_env_file_path(std::env::var_os(ENV_FILE_VAR))
}

fn resolve_env_file_path(override_path: Option<OsString>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_ENV_FILE),
    }
}

/// Parsed contents of a dotenv file
#[derive(Debug, Clone)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Read and parse a dotenv file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing, unreadable
    /// or contains a line dotenvy cannot parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path).map_err(|e| ConfigError::env_file(path, e))?;

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::env_file(path, e))?;
            values.insert(key, value);
        }

        debug!(path = %path.display(), count = values.len(), "Loaded env file");

        Ok(Self { values })
    }

    /// Resolve a variable: process environment, then file, then `""`.
    pub fn get(&self, key: &str) -> String {
        self.resolve(key, std::env::var(key).ok())
    }

    fn resolve(&self, key: &str, process_value: Option<String>) -> String {
        process_value
            .or_else(|| self.values.get(key).cloned())
            .unwrap_or_default()
    }

    /// Resolve every key into a mapping. Missing keys map to `""`.
    pub fn get_many<S: AsRef<str>>(&self, keys: &[S]) -> HashMap<String, String> {
        keys.iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), self.get(key))
            })
            .collect()
    }
}

/// Load `keys` from the dotenv file at `path`.
///
/// # Errors
///
/// Fails only when the file itself cannot be loaded; absent keys map to `""`.
pub fn load_env_variables<S: AsRef<str>>(
    path: impl AsRef<Path>,
    keys: &[S],
) -> Result<HashMap<String, String>> {
    Ok(EnvFile::load(path)?.get_many(keys))
}

/// Load a single key from the dotenv file at `path`.
pub fn load_env_variable(path: impl AsRef<Path>, key: &str) -> Result<String> {
    Ok(EnvFile::load(path)?.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_requested_keys() {
        let file = env_file("CMS_T1_USER=alice\nCMS_T1_HOST=db.local\n");
        let vars = load_env_variables(file.path(), &["CMS_T1_USER", "CMS_T1_HOST"]).unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars["CMS_T1_USER"], "alice");
        assert_eq!(vars["CMS_T1_HOST"], "db.local");
    }

    #[test]
    fn missing_key_maps_to_empty_string() {
        let file = env_file("CMS_T2_USER=alice\n");
        let vars = load_env_variables(file.path(), &["CMS_T2_USER", "CMS_T2_PASSWORD"]).unwrap();

        assert_eq!(vars["CMS_T2_USER"], "alice");
        assert_eq!(vars["CMS_T2_PASSWORD"], "");
    }

    #[test]
    fn empty_value_is_not_validated() {
        let file = env_file("CMS_T3_NAME=\n");
        assert_eq!(load_env_variable(file.path(), "CMS_T3_NAME").unwrap(), "");
    }

    #[test]
    fn handles_comments_and_quotes() {
        let file = env_file("# database\nexport CMS_T4_PASSWORD=\"s3cr3t pass\"\n");
        assert_eq!(
            load_env_variable(file.path(), "CMS_T4_PASSWORD").unwrap(),
            "s3cr3t pass"
        );
    }

    #[test]
    fn process_environment_wins_over_file() {
        let file = env_file("CMS_T5_HOST=from-file\n");
        let env = EnvFile::load(file.path()).unwrap();

        assert_eq!(
            env.resolve("CMS_T5_HOST", Some("from-process".to_string())),
            "from-process"
        );
        assert_eq!(env.resolve("CMS_T5_HOST", None), "from-file");
        assert_eq!(env.resolve("CMS_T5_MISSING", None), "");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.env");

        let err = load_env_variables(&path, &["DB_USER"]).unwrap_err();
        assert_eq!(err.path(), &path);
        assert!(err.to_string().starts_with("Error loading .env file"));
    }

    #[test]
    fn error_message_does_not_repeat_cause() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_env_variable(dir.path().join("absent.env"), "DB_USER").unwrap_err();

        assert!(matches!(err, ConfigError::EnvFileIo { .. }));
        let source = std::error::Error::source(&err).unwrap();
        assert!(!err.to_string().contains(&source.to_string()));
        assert!(std::error::Error::source(source).is_none());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = env_file("DB_USER='unterminated\n");
        let err = load_env_variable(file.path(), "DB_USER").unwrap_err();

        assert!(matches!(err, ConfigError::EnvFileParse { .. }));
        assert_eq!(err.path(), file.path());
    }

    #[test]
    fn env_file_path_defaults_to_parent_dotenv() {
        assert_eq!(resolve_env_file_path(None), PathBuf::from("../.env"));
        assert_eq!(resolve_env_file_path(Some(OsString::new())), PathBuf::from("../.env"));
        assert_eq!(
            resolve_env_file_path(Some(OsString::from("/etc/cms.env"))),
            PathBuf::from("/etc/cms.env")
        );
    }
}
