//! Database credentials read from the environment

use std::collections::HashMap;
use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Variables the connector reads from the configuration file
pub const REQUIRED_VARS: [&str; 4] = ["DB_USER", "DB_PASSWORD", "DB_NAME", "DB_HOST"];

/// TLS verification mode used for every connection
pub const SSL_MODE: &str = "verify-full";

const REDACTED: &str = "****";

/// PostgreSQL login fields.
///
/// Values are taken as-is; empty strings are passed through to the server.
#[derive(Clone, PartialEq, Eq)]
pub struct DbCredentials {
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub host: String,
}

impl DbCredentials {
    /// Build credentials from a loader mapping (`DB_USER`, `DB_PASSWORD`,
    /// `DB_NAME`, `DB_HOST`). Absent keys become empty strings.
    pub fn from_env(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| vars.get(key).cloned().unwrap_or_default();
        Self {
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            dbname: get("DB_NAME"),
            host: get("DB_HOST"),
        }
    }

    /// Keyword/value connection string, e.g.
    /// `user='cms' password='secret' dbname='cms' host='db.local' sslmode='verify-full'`
    ///
    /// Every value is single-quoted with `\` and `'` backslash-escaped, so
    /// empty values and values with spaces survive libpq parsing.
    pub fn connection_string(&self) -> String {
        self.format_connection_string(&self.password)
    }

    /// Connection string with the password masked, safe for logs
    pub fn redacted_connection_string(&self) -> String {
        self.format_connection_string(REDACTED)
    }

    fn format_connection_string(&self, password: &str) -> String {
        format!(
            "user={} password={} dbname={} host={} sslmode={}",
            quote_value(&self.user),
            quote_value(password),
            quote_value(&self.dbname),
            quote_value(&self.host),
            quote_value(SSL_MODE)
        )
    }

    /// sqlx connect options with `sslmode=verify-full`
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::VerifyFull)
    }
}

/// Quote a keyword/value connection string value the way libpq reads it
fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("dbname", &self.dbname)
            .field("host", &self.host)
            .finish()
    }
}
