//! Process startup: configuration, database handle, server
//!
//! Every step returns a `Result`; the caller decides whether to abort.
//! Configuration and the database are resolved before the listener binds.

use std::path::Path;

use cms_core::env::load_env_variables;
use tracing::info;

use crate::db::{Database, DbCredentials, REQUIRED_VARS};
use crate::error::Result;
use crate::http::{run_server, ServerConfig};
use crate::state::AppState;

/// Load credentials from `env_path`, open the database handle and run the
/// diagnostic query.
pub async fn bootstrap(env_path: &Path) -> Result<Database> {
    let vars = load_env_variables(env_path, &REQUIRED_VARS)?;
    info!(path = %env_path.display(), "Loaded configuration");

    let credentials = DbCredentials::from_env(&vars);
    let db = Database::connect_and_verify(&credentials).await?;
    Ok(db)
}

/// Bootstrap, serve until shutdown, then release the database handle.
pub async fn run(env_path: &Path, config: ServerConfig) -> Result<()> {
    let db = bootstrap(env_path).await?;
    let state = AppState::new(db.clone());

    let result = run_server(state, config).await;
    db.close().await;
    result
}
