//! Configuration schema definitions.
//!
//! Every section derives Serde traits and defaults, so an empty file (or no
//! file at all) yields the stock gateway: HTTP on port 8080, user service on
//! port 50051.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Inbound HTTP listener.
    pub listener: ListenerConfig,

    /// Outbound user service.
    pub upstream: UpstreamConfig,

    /// Request handler behaviour.
    pub handler: HandlerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// User service connection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Service address. A bare `host:port` is dialled over plaintext HTTP/2.
    pub endpoint: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: "localhost:50051".to_string(),
        }
    }
}

/// Handler configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HandlerConfig {
    /// Username looked up when the query omits one. Development convenience;
    /// set to an empty string to require the parameter instead.
    pub fallback_username: Option<String>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            fallback_username: Some("xreyc".to_string()),
        }
    }
}

impl HandlerConfig {
    /// The fallback username, if one is enabled.
    pub fn fallback(&self) -> Option<&str> {
        self.fallback_username
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format for log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_ports() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.endpoint, "localhost:50051");
        assert_eq!(config.handler.fallback(), Some("xreyc"));
    }

    #[test]
    fn empty_toml_is_default() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config, GatewayConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            endpoint = "auth.internal:6000"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.endpoint, "auth.internal:6000");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn empty_fallback_disables_it() {
        let handler = HandlerConfig {
            fallback_username: Some(String::new()),
        };
        assert_eq!(handler.fallback(), None);

        let handler = HandlerConfig {
            fallback_username: None,
        };
        assert_eq!(handler.fallback(), None);
    }
}
