use std::env;
use std::fmt;

use crate::desk::parse_capacities;
use crate::facility::{ParkingStrategy, UnknownStrategy};

/// Deployment stage of the console; selects the default log filter.
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

    /// Log filter used when `PARKING_LOG_LEVEL` is unset.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub facility: FacilityConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("PARKING_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let strategy = match env::var("PARKING_STRATEGY") {
            Ok(raw) => raw
                .parse::<ParkingStrategy>()
                .map_err(ConfigError::InvalidStrategy)?,
            Err(_) => ParkingStrategy::default(),
        };

        let capacities = match env::var("PARKING_LOT_CAPACITIES") {
            Ok(raw) if !raw.trim().is_empty() => {
                let capacities = parse_capacities(&raw)
                    .map_err(|_| ConfigError::InvalidCapacities { value: raw })?;
                Some(capacities)
            }
            _ => None,
        };

        let log_level = env::var("PARKING_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            facility: FacilityConfig {
                capacities,
                strategy,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Facility layout applied when the console starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityConfig {
    /// Lot capacities to set up before the first request; `None` waits for an explicit setup.
    pub capacities: Option<Vec<usize>>,
    pub strategy: ParkingStrategy,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidStrategy(UnknownStrategy),
    InvalidCapacities { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStrategy(err) => write!(f, "PARKING_STRATEGY: {err}"),
            ConfigError::InvalidCapacities { value } => write!(
                f,
                "PARKING_LOT_CAPACITIES must be a comma-separated list of positive integers, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidStrategy(err) => Some(err),
            ConfigError::InvalidCapacities { .. } => None,
        }
    }
}
