//! HTTP server layer
//!
//! Axum server with a single `GET /health` route, request tracing and
//! shutdown on SIGTERM/Ctrl+C.

pub mod routes;
pub mod server;

pub use server::{build_router, run_server, serve_on, shutdown_signal, ServerConfig};
