//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `STORAGE` - storage backend: `memory` or `postgres` (default: `memory`)
//! - `DATABASE_URL` - PostgreSQL connection string (required for `postgres`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `CODE_LENGTH` - short code length, positive integer (default: `10`)
//! - `SHORT_URL_PREFIX` - prefix prepended to generated codes
//!   (default: `https://sho.rt/`)
//! - `RUST_LOG` - log level (default: `info`)

use anyhow::{Context, Result, bail};
use std::env;

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    /// Process-local map store. Mappings are lost on restart.
    Memory,
    /// PostgreSQL-backed store.
    Postgres { database_url: String },
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: Storage,
    pub listen_addr: String,
    pub code_length: usize,
    pub short_url_prefix: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown `STORAGE` value, a missing
    /// `DATABASE_URL` when the postgres backend is selected, or a
    /// non-positive `CODE_LENGTH`.
    pub fn from_env() -> Result<Self> {
        let storage = match env::var("STORAGE").as_deref().unwrap_or("memory") {
            "memory" => Storage::Memory,
            "postgres" => {
                let database_url = env::var("DATABASE_URL")
                    .context("DATABASE_URL must be set when STORAGE=postgres")?;
                Storage::Postgres { database_url }
            }
            other => bail!("got unknown storage type from config: {other}"),
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let code_length = match env::var("CODE_LENGTH") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("invalid CODE_LENGTH: {raw}"))?,
            Err(_) => 10,
        };
        if code_length == 0 {
            bail!("CODE_LENGTH must be a positive integer");
        }

        let short_url_prefix =
            env::var("SHORT_URL_PREFIX").unwrap_or_else(|_| "https://sho.rt/".to_string());

        Ok(Self {
            storage,
            listen_addr,
            code_length,
            short_url_prefix,
            log_level,
        })
    }
}
