use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::error::ConfigError;

pub const GRADIO_API_URL: &str = "GRADIO_API_URL";
pub const GRADIO_API_KEY: &str = "GRADIO_API_KEY";
pub const GRADIO_TIMEOUT_SECS: &str = "GRADIO_TIMEOUT_SECS";
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Everything the process needs, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub gradio: GradioConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Where and how to reach the remote prediction service.
#[derive(Clone, PartialEq)]
pub struct GradioConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub api_key: String,
    /// Whole-request timeout for the outbound call. `None` leaves the transport default.
    pub timeout: Option<Duration>,
}

impl GradioConfig {
    pub fn predict_url(&self) -> String {
        format!("{}/api/predict", self.base_url)
    }
}

// Keep the credential out of logs and panic messages.
impl std::fmt::Debug for GradioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradioConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |var: &'static str| optional(var).ok_or(ConfigError::Missing(var));

        let base_url = required(GRADIO_API_URL)?.trim_end_matches('/').to_string();
        check_base_url(&base_url)?;
        let api_key = required(GRADIO_API_KEY)?;

        let timeout = match optional(GRADIO_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: f64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    var: GRADIO_TIMEOUT_SECS,
                    reason: format!("'{}' is not a number of seconds", raw),
                })?;
                if !secs.is_finite() || secs <= 0.0 {
                    return Err(ConfigError::Invalid {
                        var: GRADIO_TIMEOUT_SECS,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                let timeout =
                    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::Invalid {
                        var: GRADIO_TIMEOUT_SECS,
                        reason: format!("'{}' is too large", raw),
                    })?;
                Some(timeout)
            }
            None => None,
        };

        let host_raw = optional(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host_raw.parse().map_err(|_| ConfigError::Invalid {
            var: HOST,
            reason: format!("'{}' is not an IP address", host_raw),
        })?;

        let port = match optional(PORT) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: PORT,
                reason: format!("'{}' is not a port number", raw),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig { host, port },
            gradio: GradioConfig {
                base_url,
                api_key,
                timeout,
            },
        })
    }
}

fn check_base_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: GRADIO_API_URL,
        reason,
    };
    let url = url::Url::parse(raw).map_err(|e| invalid(format!("'{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("'{}' must use http or https", raw)));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(format!("'{}' has no host", raw)));
    }
    Ok(())
}
