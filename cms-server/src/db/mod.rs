//! Database layer - credentials and the connection handle
//!
//! One [`Database`] is opened at startup, verified with `select version()`,
//! handed to the router through `AppState` and closed on shutdown.

pub mod connection;
pub mod credentials;

pub use connection::Database;
pub use credentials::{DbCredentials, REQUIRED_VARS};
