//! Configuration schema definitions.
//!
//! All types derive Serde traits so the same structure can be read from a
//! TOML file and then overridden from the command line.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8181;

/// Root configuration for the file server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServeConfig {
    /// Listener configuration (bind address, port).
    pub listener: ListenerConfig,

    /// Directory the catalog is served from. `None` means the working directory.
    pub root_dir: Option<PathBuf>,

    /// Servable file names, in catalog order.
    /// Empty means every regular file in `root_dir`, sorted.
    pub files: Vec<String>,

    /// Caller addresses allowed to issue any request.
    pub allow: Vec<String>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub bind_address: String,

    /// TCP port.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ListenerConfig {
    /// `host:port` string suitable for binding.
    pub fn socket_address(&self) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, self.port)
        } else {
            format!("{}:{}", self.bind_address, self.port)
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Time allowed to produce a response, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServeConfig::default();
        assert_eq!(config.listener.port, 8181);
        assert_eq!(config.listener.socket_address(), "0.0.0.0:8181");
        assert!(config.root_dir.is_none());
        assert!(config.files.is_empty());
        assert!(config.allow.is_empty());
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_ipv6_socket_address() {
        let listener = ListenerConfig {
            bind_address: "::1".into(),
            port: 9000,
        };
        assert_eq!(listener.socket_address(), "[::1]:9000");
    }

    #[test]
    fn test_partial_toml() {
        let config: ServeConfig = toml::from_str(
            r#"
            allow = ["10.0.0.2"]

            [listener]
            port = 9090
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.port, 9090);
        assert_eq!(config.listener.bind_address, "0.0.0.0");
        assert_eq!(config.allow, vec!["10.0.0.2".to_string()]);
        assert_eq!(config.observability.log_level, "info");
    }
}
