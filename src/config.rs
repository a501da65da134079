use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::http::api_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub api_timeout: Duration,
    /// Serve reads from the bundled fixtures instead of the remote API.
    pub use_static_services: bool,
    /// Route hooks and writes through the fixture-backed mock services.
    pub use_mock_services: bool,
    pub simulate_latency: bool,
    pub local_storage_path: PathBuf,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{environment}");
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let is_production = environment == "production";

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
                reason: "expected a port number",
            })?,
            None => 8080,
        };

        let api_timeout = match lookup("API_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "API_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    })
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let use_static_flag = parse_flag(&lookup, "USE_STATIC_SERVICES")?.unwrap_or(false);
        let use_mock_services =
            parse_flag(&lookup, "USE_MOCK_SERVICES")?.unwrap_or(environment == "development");

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            api_base_url: lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_timeout,
            use_static_services: is_production || use_static_flag,
            use_mock_services,
            simulate_latency: parse_flag(&lookup, "SIMULATE_LATENCY")?.unwrap_or(true),
            local_storage_path: lookup("LOCAL_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".portfolio-storage.json")),
            environment,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Label reported by the readiness check.
    pub fn service_mode(&self) -> &'static str {
        if self.use_mock_services {
            "mock"
        } else if self.use_static_services {
            "static"
        } else {
            "api"
        }
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: "expected true or false",
        }),
    }
}
