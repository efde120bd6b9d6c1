//! Configuration management for the MCP servers.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, `.env` files, or defaults. Both
//! binaries share the same structure; the [`ToolSet`] passed at load time
//! selects the per-server defaults (name, ports, instructions).

use super::transport::{TransportConfig, TransportDefaults};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the WeatherAPI.com credential.
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Selects which family of tools a server instance exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolSet {
    /// PTO balance query tools.
    Pto,
    /// Weather lookup tool.
    Weather,
}

impl ToolSet {
    /// Default server name reported to clients.
    pub fn server_name(&self) -> &'static str {
        match self {
            Self::Pto => "pto-hours-server",
            Self::Weather => "weather-lookup-server",
        }
    }

    /// Instructions string advertised during MCP initialization.
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::Pto => {
                "Answers questions about the employee's paid-time-off balance: \
                 hours and days available, full/half day eligibility, and days taken."
            }
            Self::Weather => {
                "Looks up current weather conditions for a US zip code via WeatherAPI.com."
            }
        }
    }

    /// Per-server transport port defaults. The two servers get distinct
    /// ports so they can run side by side on one host.
    pub fn transport_defaults(&self) -> TransportDefaults {
        match self {
            Self::Pto => TransportDefaults {
                http_port: 8000,
                tcp_port: 3000,
            },
            Self::Weather => TransportDefaults {
                http_port: 8001,
                tcp_port: 3001,
            },
        }
    }
}

/// Main configuration structure shared by both servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// PTO balance configuration (used by the pto toolset).
    pub pto: PtoConfig,

    /// Weather provider configuration (used by the weather toolset).
    pub weather: WeatherConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Which tool family this server instance registers.
    pub toolset: ToolSet,
}

/// Configuration for the PTO balance.
///
/// The balance is fixed for the lifetime of the process; there is no write
/// path. Values come from the environment or these defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PtoConfig {
    /// PTO hours the employee can still take.
    pub hours_available: u32,

    /// PTO hours the employee has already taken this year.
    pub hours_taken: u32,
}

impl Default for PtoConfig {
    fn default() -> Self {
        Self {
            hours_available: 94,
            hours_taken: 104,
        }
    }
}

/// Configuration for the weather provider endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current-conditions endpoint URL.
    pub api_url: String,

    /// Upper bound on a single outbound request, in seconds.
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: "http://api.weatherapi.com/v1/current.json".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// WeatherAPI.com API key.
    /// Get a free key at: https://www.weatherapi.com/signup.aspx
    pub weather_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Config {
    /// Create a configuration with the defaults for the given toolset.
    pub fn new(toolset: ToolSet) -> Self {
        Self {
            server: ServerConfig {
                name: toolset.server_name().to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                toolset,
            },
            pto: PtoConfig::default(),
            weather: WeatherConfig::default(),
            credentials: CredentialsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default_for(toolset.transport_defaults()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first. Environment
    /// variables are prefixed with `MCP_`, except the weather credential
    /// which keeps its provider-conventional name `WEATHER_API_KEY`.
    pub fn from_env(toolset: ToolSet) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::new(toolset);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(hours) = std::env::var("MCP_PTO_HOURS_AVAILABLE") {
            match hours.parse() {
                Ok(n) => config.pto.hours_available = n,
                Err(_) => warn!("Ignoring invalid MCP_PTO_HOURS_AVAILABLE: {}", hours),
            }
        }

        if let Ok(hours) = std::env::var("MCP_PTO_HOURS_TAKEN") {
            match hours.parse() {
                Ok(n) => config.pto.hours_taken = n,
                Err(_) => warn!("Ignoring invalid MCP_PTO_HOURS_TAKEN: {}", hours),
            }
        }

        if let Ok(url) = std::env::var("MCP_WEATHER_API_URL") {
            config.weather.api_url = url;
        }

        if let Ok(secs) = std::env::var("MCP_WEATHER_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(n) => config.weather.timeout_secs = n,
                Err(_) => warn!("Ignoring invalid MCP_WEATHER_TIMEOUT_SECS: {}", secs),
            }
        }

        if let Ok(api_key) = std::env::var(WEATHER_API_KEY_VAR) {
            config.credentials.weather_api_key = Some(api_key);
            info!("Weather API key loaded from environment");
        } else if toolset == ToolSet::Weather {
            warn!(
                "{} not set - weather lookups will report a configuration error \
                 (get a free key at https://www.weatherapi.com/signup.aspx)",
                WEATHER_API_KEY_VAR
            );
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env(toolset.transport_defaults());

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_pto_defaults() {
        let config = Config::new(ToolSet::Pto);
        assert_eq!(config.pto.hours_available, 94);
        assert_eq!(config.pto.hours_taken, 104);
        assert_eq!(config.server.name, "pto-hours-server");
    }

    #[test]
    fn test_pto_balance_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PTO_HOURS_AVAILABLE", "40");
            std::env::set_var("MCP_PTO_HOURS_TAKEN", "16");
        }
        let config = Config::from_env(ToolSet::Pto);
        assert_eq!(config.pto.hours_available, 40);
        assert_eq!(config.pto.hours_taken, 16);
        unsafe {
            std::env::remove_var("MCP_PTO_HOURS_AVAILABLE");
            std::env::remove_var("MCP_PTO_HOURS_TAKEN");
        }
    }

    #[test]
    fn test_invalid_pto_hours_fall_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PTO_HOURS_AVAILABLE", "-3");
        }
        let config = Config::from_env(ToolSet::Pto);
        assert_eq!(config.pto.hours_available, 94);
        unsafe {
            std::env::remove_var("MCP_PTO_HOURS_AVAILABLE");
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(WEATHER_API_KEY_VAR, "test_key_12345");
        }
        let config = Config::from_env(ToolSet::Weather);
        assert_eq!(
            config.credentials.weather_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var(WEATHER_API_KEY_VAR);
        }
    }

    #[test]
    fn test_credentials_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var(WEATHER_API_KEY_VAR);
        }
        let config = Config::from_env(ToolSet::Weather);
        assert!(config.credentials.weather_api_key.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            weather_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_toolset_port_defaults_do_not_collide() {
        let pto = ToolSet::Pto.transport_defaults();
        let weather = ToolSet::Weather.transport_defaults();
        assert_ne!(pto.http_port, weather.http_port);
        assert_ne!(pto.tcp_port, weather.tcp_port);
    }
}
