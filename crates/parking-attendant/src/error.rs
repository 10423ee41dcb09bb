use crate::config::ConfigError;
use crate::desk::report::ReportError;
use crate::desk::RequestError;
use crate::telemetry::TelemetryError;

/// Failures that stop the console before or between requests.
///
/// Refused parking requests are normally answered in-session; `Request` only appears when a
/// layout given at startup is rejected.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad startup configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("logging unavailable: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("startup layout refused: {0}")]
    Request(#[from] RequestError),
    #[error("status could not be rendered: {0}")]
    Report(#[from] ReportError),
}
