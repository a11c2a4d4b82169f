//! Environment-driven settings for the notices host.

use std::time::Duration;

use notices_core::{DEFAULT_ENDPOINT, DEFAULT_ROUTE};
use tracing::warn;

pub const ENV_ENDPOINT: &str = "NOTICES_ENDPOINT";
pub const ENV_ROUTE: &str = "NOTICES_ROUTE";
pub const ENV_VERIFY_TLS: &str = "NOTICES_VERIFY_TLS";
pub const ENV_TIMEOUT_SECS: &str = "NOTICES_TIMEOUT_SECS";
pub const ENV_BIND_ADDR: &str = "NOTICES_BIND_ADDR";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Full URL of the feed's `data.json`.
    pub endpoint: String,
    /// Path the page is served on; pagination links point here too.
    pub route: String,
    /// Certificate verification for the outbound feed call. Off unless
    /// `NOTICES_VERIFY_TLS` turns it on.
    pub verify_tls: bool,
    pub timeout: Duration,
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            route: DEFAULT_ROUTE.to_string(),
            verify_tls: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparseable values keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let endpoint = value(ENV_ENDPOINT).unwrap_or(defaults.endpoint);

        let route = match value(ENV_ROUTE) {
            Some(route) if route.starts_with('/') => route.trim_end_matches('/').to_string(),
            Some(route) => {
                warn!("{} must start with '/', got {:?}; using default", ENV_ROUTE, route);
                defaults.route
            }
            None => defaults.route,
        };
        let route = if route.is_empty() {
            DEFAULT_ROUTE.to_string()
        } else {
            route
        };

        let verify_tls = match value(ENV_VERIFY_TLS) {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!("Invalid {} value {:?}; using default", ENV_VERIFY_TLS, raw);
                defaults.verify_tls
            }),
            None => defaults.verify_tls,
        };

        let timeout = match value(ENV_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Invalid {} value {:?}; using default", ENV_TIMEOUT_SECS, raw);
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let bind_addr = value(ENV_BIND_ADDR).unwrap_or(defaults.bind_addr);

        Self {
            endpoint,
            route,
            verify_tls,
            timeout,
            bind_addr,
        }
    }

    /// Route of the JSON rendering of the page.
    pub fn json_route(&self) -> String {
        format!("{}.json", self.route)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
