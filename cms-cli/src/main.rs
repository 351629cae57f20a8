//! cms - backend entry point
//!
//! Loads database credentials from the `.env` file (`CMS_ENV_FILE`, default
//! `../.env`), verifies the database with `select version()` and serves
//! `GET /health` on port 8080. Any startup failure ends the process with
//! exit status 1.

use anyhow::{Context, Result};
use cms_core::env_file_path;
use cms_server::startup;
use cms_server::ServerConfig;

mod tracing_setup;

#[tokio::main]
async fn main() {
    if let Err(err) = tracing_setup::init_tracing() {
        eprintln!("Failed to initialize tracing: {:#}", err);
    }

    if let Err(err) = run().await {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let env_path = env_file_path();
    let config = ServerConfig::default();

    tracing::info!(env_file = %env_path.display(), bind = %config.bind_addr, "Starting cms backend");

    startup::run(&env_path, config)
        .await
        .context("cms backend failed")?;

    Ok(())
}
