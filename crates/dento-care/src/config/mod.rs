use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Patient name used in greetings when the caller does not supply one.
pub const DEFAULT_PATIENT_NAME: &str = "المريض";

/// Number of recent search terms remembered by default.
pub const DEFAULT_SEARCH_HISTORY_LIMIT: usize = 5;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assistant: AssistantConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let default_patient_name = env::var("APP_DEFAULT_PATIENT_NAME")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PATIENT_NAME.to_string());

        let search_history_limit = match env::var("APP_SEARCH_HISTORY_LIMIT") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidSearchHistoryLimit { value: raw }),
            },
            Err(_) => DEFAULT_SEARCH_HISTORY_LIMIT,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assistant: AssistantConfig {
                default_patient_name,
                search_history_limit,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Presentation defaults shared by the assistants and the directory search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub default_patient_name: String,
    pub search_history_limit: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            default_patient_name: DEFAULT_PATIENT_NAME.to_string(),
            search_history_limit: DEFAULT_SEARCH_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSearchHistoryLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSearchHistoryLimit { value } => write!(
                f,
                "APP_SEARCH_HISTORY_LIMIT must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidSearchHistoryLimit { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_DEFAULT_PATIENT_NAME");
        env::remove_var("APP_SEARCH_HISTORY_LIMIT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.assistant, AssistantConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_assistant_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DEFAULT_PATIENT_NAME", "  سارة  ");
        env::set_var("APP_SEARCH_HISTORY_LIMIT", "8");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.assistant.default_patient_name, "سارة");
        assert_eq!(config.assistant.search_history_limit, 8);
        reset_env();
    }

    #[test]
    fn rejects_zero_search_history_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SEARCH_HISTORY_LIMIT", "0");
        let err = AppConfig::load().expect_err("zero limit rejected");
        assert!(matches!(err, ConfigError::InvalidSearchHistoryLimit { .. }));
        reset_env();
    }
}
