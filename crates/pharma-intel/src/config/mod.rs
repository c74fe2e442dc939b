//! Process configuration read from `.env` and the environment.

use std::env;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub intelligence: IntelligenceDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is normal outside local development.
        let _ = dotenvy::dotenv();

        let environment = optional_var("APP_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let port = match optional_var("APP_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: optional_var("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: optional_var("APP_LOG_LEVEL")
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            intelligence: IntelligenceDefaults {
                target_markets: optional_var("INTEL_TARGET_MARKETS")
                    .map(|raw| split_markets(&raw))
                    .unwrap_or_default(),
            },
        })
    }
}

/// Unset and blank variables both read as absent.
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn split_markets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|market| !market.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Apply command-line overrides on top of the environment.
    pub fn override_with(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Fallbacks applied to submissions that leave optional context empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntelligenceDefaults {
    pub target_markets: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got {value:?}")]
    InvalidPort { value: String },
    #[error("APP_HOST {host:?} is not an IP address or localhost")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    const KEYS: [&str; 5] = [
        "APP_ENV",
        "APP_HOST",
        "APP_PORT",
        "APP_LOG_LEVEL",
        "INTEL_TARGET_MARKETS",
    ];

    /// Serializes tests that mutate the process environment.
    fn with_env<T>(vars: &[(&str, &str)], check: impl FnOnce() -> T) -> T {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        let _lock = GUARD
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = check();
        for key in KEYS {
            env::remove_var(key);
        }
        result
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = with_env(&[], AppConfig::load).expect("defaults load");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.telemetry.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.intelligence.target_markets.is_empty());
    }

    #[test]
    fn environment_aliases_resolve() {
        let config = with_env(&[("APP_ENV", " CI ")], AppConfig::load).expect("loads");
        assert_eq!(config.environment, AppEnvironment::Test);

        let config = with_env(&[("APP_ENV", "prod")], AppConfig::load).expect("loads");
        assert_eq!(config.environment, AppEnvironment::Production);
    }

    #[test]
    fn localhost_and_overrides_resolve_socket() {
        let mut config = with_env(&[("APP_HOST", "localhost")], AppConfig::load).expect("loads");
        assert_eq!(
            config.server.socket_addr().expect("localhost resolves"),
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        );

        config.server.override_with(Some("0.0.0.0".to_string()), Some(8080));
        assert_eq!(
            config.server.socket_addr().expect("override resolves"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[test]
    fn invalid_port_and_host_are_reported() {
        let error = with_env(&[("APP_PORT", "eighty")], AppConfig::load)
            .expect_err("port must be numeric");
        assert!(matches!(error, ConfigError::InvalidPort { ref value } if value == "eighty"));

        let server = ServerConfig {
            host: "pharma.internal".to_string(),
            port: DEFAULT_PORT,
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }

    #[test]
    fn target_markets_are_split_and_trimmed() {
        let config = with_env(&[("INTEL_TARGET_MARKETS", " USA, EU ,,Japan")], AppConfig::load)
            .expect("loads");
        assert_eq!(config.intelligence.target_markets, vec!["USA", "EU", "Japan"]);
    }
}
