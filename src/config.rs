// src/config.rs

use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Static configuration for the ranking service transport. The base URL
/// is the only externally configurable value.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Resolve the service base URL from `SMARTHIRE_SERVICE_URL`, falling
    /// back to the default local endpoint.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SMARTHIRE_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());

        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
