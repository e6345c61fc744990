//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Game result sources
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_predictions_csv")]
    pub predictions_csv: PathBuf,

    #[serde(default = "default_actual_csv")]
    pub actual_csv: PathBuf,
}

fn default_predictions_csv() -> PathBuf {
    PathBuf::from("./data/predicted.csv")
}

fn default_actual_csv() -> PathBuf {
    PathBuf::from("./data/actual.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            predictions_csv: default_predictions_csv(),
            actual_csv: default_actual_csv(),
        }
    }
}

/// HTTP client configuration (CLI)
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8082".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Returns the config together with any override warnings.
    pub fn load_with_env(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok((config, warnings))
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here: the logging setup itself comes from this
    /// config, so diagnostics are returned in the [`LoadReport`] and logged
    /// once the subscriber is installed.
    pub fn load_default() -> (Self, LoadReport) {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("courtside").join("config.toml")),
            Some(PathBuf::from("/etc/courtside/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        let paths: Vec<PathBuf> = config_paths.into_iter().flatten().collect();
        let (mut config, mut report) = Self::load_first(&paths);
        report.warnings.extend(config.apply_env_overrides());
        (config, report)
    }

    /// Load the first readable file among `paths`, recording every file that
    /// exists but fails to load. Falls back to defaults.
    fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    report.source = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.warnings.push(e.to_string()),
            }
        }

        (Self::default(), report)
    }

    /// Apply `COURTSIDE_*` environment overrides
    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `var`; returns a warning per rejected value
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(host) = var("COURTSIDE_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("COURTSIDE_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid COURTSIDE_API_PORT: {}", port)),
            }
        }

        if let Some(path) = var("COURTSIDE_PREDICTIONS_CSV") {
            self.data.predictions_csv = PathBuf::from(path);
        }
        if let Some(path) = var("COURTSIDE_ACTUAL_CSV") {
            self.data.actual_csv = PathBuf::from(path);
        }

        if let Some(level) = var("COURTSIDE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("COURTSIDE_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }
}

/// How [`Config::load_default`] arrived at its config
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Unreadable config files and rejected overrides
    pub warnings: Vec<String>,
}

impl LoadReport {
    /// Emit the report. Call after the tracing subscriber is installed.
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Courtside Configuration
#
# Environment variables override these settings:
# - COURTSIDE_API_HOST
# - COURTSIDE_API_PORT
# - COURTSIDE_PREDICTIONS_CSV
# - COURTSIDE_ACTUAL_CSV
# - COURTSIDE_LOG_LEVEL
# - COURTSIDE_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty list allows any origin), e.g.
# cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]
cors_origins = []

[data]
# Per-game predicted outcomes (columns: Date, Home Team Name, Away Team Name, Home Win)
predictions_csv = "./data/predicted.csv"

# Per-game actual outcomes, same columns
actual_csv = "./data/actual.csv"

[client]
# Data service used by `courtside fetch`
base_url = "http://localhost:8082"

# Request timeout in milliseconds
request_timeout_ms = 10000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
