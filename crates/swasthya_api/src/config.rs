//! Server configuration from the environment.
//!
//! Every parameter has a default applied when the variable is unset or
//! empty. A value that is present but unparseable fails startup with a
//! config error instead of being silently replaced.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Environment-driven server parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigParam {
    BindHost,
    BindPort,
}

/// Environment variable name for a parameter.
pub fn env_var_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::BindHost => "SWASTHYA_API_HOST",
        ConfigParam::BindPort => "SWASTHYA_API_PORT",
    }
}

/// Default applied when the variable is unset or empty.
pub fn default_value(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::BindHost => "0.0.0.0",
        ConfigParam::BindPort => "8000",
    }
}

/// Error for a present-but-invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub param_name: &'static str,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config: '{}' is invalid ({})", self.param_name, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve from raw values, applying defaults for missing/empty ones.
    pub fn resolve(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host_raw = non_empty(host).unwrap_or_else(|| default_value(ConfigParam::BindHost).to_string());
        let port_raw = non_empty(port).unwrap_or_else(|| default_value(ConfigParam::BindPort).to_string());

        let host = host_raw.parse::<IpAddr>().map_err(|e| ConfigError {
            param_name: env_var_name(ConfigParam::BindHost),
            reason: format!("{e}: {host_raw:?}"),
        })?;
        let port = port_raw.parse::<u16>().map_err(|e| ConfigError {
            param_name: env_var_name(ConfigParam::BindPort),
            reason: format!("{e}: {port_raw:?}"),
        })?;

        Ok(Self { host, port })
    }

    /// Read and resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var(env_var_name(ConfigParam::BindHost)).ok(),
            std::env::var(env_var_name(ConfigParam::BindPort)).ok(),
        )
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::resolve(None, None).unwrap();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = ServerConfig::resolve(Some("  ".to_string()), Some(String::new())).unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn explicit_values_take_precedence() {
        let config =
            ServerConfig::resolve(Some("127.0.0.1".to_string()), Some("9100".to_string())).unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9100");
    }

    #[test]
    fn unparseable_port_fails_startup() {
        let err = ServerConfig::resolve(None, Some("not-a-port".to_string())).unwrap_err();
        assert_eq!(err.param_name, "SWASTHYA_API_PORT");
    }

    #[test]
    fn unparseable_host_fails_startup() {
        let err = ServerConfig::resolve(Some("nowhere".to_string()), None).unwrap_err();
        assert_eq!(err.param_name, "SWASTHYA_API_HOST");
    }
}
