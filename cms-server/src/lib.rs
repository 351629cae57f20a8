//! cms-server: database connector and HTTP server for the cms backend
//!
//! Opens one PostgreSQL handle at startup, verifies it with
//! `select version()` and serves `GET /health` on port 8080.

pub mod db;
pub mod error;
pub mod http;
pub mod startup;
pub mod state;

pub use db::{Database, DbCredentials};
pub use error::{Error, Result};
pub use http::{build_router, ServerConfig};
pub use state::AppState;
