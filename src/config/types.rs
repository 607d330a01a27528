#[derive(Debug, Clone, Default)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub server: ServerConfig,
}

/// Connection settings for the external inference service. Everything here
/// is optional: a missing base URL leaves the gateway serving simulated
/// responses, and a missing token just omits the Authorization header.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
    /// Skip the upstream attempt entirely and always serve the simulator.
    pub force_simulation: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout_secs: default_timeout_secs(),
            force_simulation: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}
