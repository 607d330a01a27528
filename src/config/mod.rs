mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Reads gateway configuration from the process environment. Every variable
/// is optional; defaults keep the gateway runnable with no environment at
/// all, in which case it serves simulated responses only.
pub fn load() -> Result<Config> {
    let upstream = UpstreamConfig {
        base_url: env_var("ADVML_UPSTREAM_URL"),
        token: env_var("ADVML_UPSTREAM_TOKEN"),
        timeout_secs: parse_env("ADVML_UPSTREAM_TIMEOUT_SECS", default_timeout_secs())?,
        force_simulation: env_var("ADVML_FORCE_SIMULATION")
            .map(|v| bool_value(&v))
            .unwrap_or(false),
    };

    let server = ServerConfig {
        host: env_var("ADVML_HOST").unwrap_or_else(default_host),
        port: parse_env("ADVML_PORT", default_port())?,
        logs: LogsConfig {
            level: env_var("ADVML_LOG_LEVEL").unwrap_or_else(default_log_level),
        },
    };

    debug!("Loaded gateway configuration from environment");

    Ok(Config { upstream, server })
}

/// Reads a variable, treating the empty string as unset.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env_var(name) {
        Some(value) => value
            .parse()
            .map_err(|_| Error::config(format!("Invalid value for {}: '{}'", name, value))),
        None => Ok(default),
    }
}

fn bool_value(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
