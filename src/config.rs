// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

/// Upper bound on how many prior results feed an analysis.
pub const MAX_HISTORY_RESULTS: i64 = 10;

/// Consistency reported while there is too little history to measure it.
pub const BASELINE_CONSISTENCY: f64 = 85.0;

/// Minimum number of historical results before variance and trend rules apply.
pub const MIN_HISTORY_FOR_TREND: usize = 3;

pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When absent the service keeps everything in memory.
    pub database_url: Option<String>,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    pub log_dir: String,
    /// Optional JSON file replacing the built-in category resource table.
    pub resource_catalog_path: Option<String>,
    pub history_limit: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or(SocketAddr::from(DEFAULT_BIND_ADDR));

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let resource_catalog_path = env::var("RESOURCE_CATALOG_PATH").ok();

        let history_limit = env::var("HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .map(|v| v.clamp(0, MAX_HISTORY_RESULTS))
            .unwrap_or(MAX_HISTORY_RESULTS);

        Self {
            database_url,
            rust_log,
            bind_addr,
            log_dir,
            resource_catalog_path,
            history_limit,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            rust_log: "info".to_string(),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            log_dir: "logs".to_string(),
            resource_catalog_path: None,
            history_limit: MAX_HISTORY_RESULTS,
        }
    }
}
