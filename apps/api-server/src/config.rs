//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::StoreConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `MONGODB_URI` is unset; the server then runs in-memory.
    pub store: Option<StoreConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let telemetry = TelemetryConfig::from_env();

        let store = env::var("MONGODB_URI").ok().map(|uri| {
            let defaults = StoreConfig::new(uri);
            StoreConfig {
                database: env::var("MONGODB_DATABASE").unwrap_or(defaults.database),
                collection: env::var("MONGODB_COLLECTION").unwrap_or(defaults.collection),
                connect_timeout: Duration::from_secs(parse_var(
                    "MONGODB_CONNECT_TIMEOUT_SECS",
                    defaults.connect_timeout.as_secs(),
                )),
                max_pool_size: parse_var("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size),
                app_name: telemetry.service_name.clone(),
                ..defaults
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            store,
            telemetry,
        }
    }
}

/// Read and parse a variable, falling back to `default` when unset or invalid.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
