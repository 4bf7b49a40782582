use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_STORE: &str = "./data/jobApplicationTracker.json";
pub const DEFAULT_TRACKER_NAME: &str = "My Job Application Tracker";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration for the tracker front ends.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = env::var("JOBTRACK_STORE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE));
        let tracker_name =
            env::var("JOBTRACK_NAME").unwrap_or_else(|_| DEFAULT_TRACKER_NAME.to_string());

        let log_level =
            env::var("JOBTRACK_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }

        Ok(Self {
            storage: StorageConfig { path, tracker_name },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the tracker lives and what a fresh one is called.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub tracker_name: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyLogLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLogLevel => write!(f, "JOBTRACK_LOG_LEVEL must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
