use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::documents::{
    ScoringPolicy, ValidationError, DEFAULT_PASS_THRESHOLD, DEFAULT_SUSPICIOUS_FACTOR,
};

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
    pub validation: ValidationConfig,
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

        let pass_threshold = match env::var("VALIDATION_PASS_THRESHOLD") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidPassThreshold(raw.clone()))?,
            Err(_) => DEFAULT_PASS_THRESHOLD,
        };
        let suspicious_factor = match env::var("VALIDATION_SUSPICIOUS_FACTOR") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidSuspiciousFactor(raw.clone()))?,
            Err(_) => DEFAULT_SUSPICIOUS_FACTOR,
        };
        let document_root = env::var("DOCUMENT_ROOT").unwrap_or_else(|_| "./uploads".to_string());

        let validation = ValidationConfig {
            pass_threshold,
            suspicious_factor,
            document_root: PathBuf::from(document_root),
        };
        validation.scoring_policy()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            validation,
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

/// Grading defaults and where uploaded documents are read from.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub pass_threshold: f64,
    pub suspicious_factor: f64,
    pub document_root: PathBuf,
}

impl ValidationConfig {
    pub fn scoring_policy(&self) -> Result<ScoringPolicy, ConfigError> {
        ScoringPolicy::new(self.pass_threshold, self.suspicious_factor).map_err(|error| match error {
            ValidationError::InvalidSuspiciousFactor(value) => {
                ConfigError::InvalidSuspiciousFactor(value.to_string())
            }
            _ => ConfigError::InvalidPassThreshold(self.pass_threshold.to_string()),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPassThreshold(String),
    InvalidSuspiciousFactor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPassThreshold(value) => write!(
                f,
                "VALIDATION_PASS_THRESHOLD must be a percentage between 0 and 100 (got '{value}')"
            ),
            ConfigError::InvalidSuspiciousFactor(value) => write!(
                f,
                "VALIDATION_SUSPICIOUS_FACTOR must be between 0 and 1 (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPassThreshold(_)
            | ConfigError::InvalidSuspiciousFactor(_) => None,
        }
    }
}
