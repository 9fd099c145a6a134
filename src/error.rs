use crate::admission::BatchError;
use crate::config::ConfigError;
use crate::intake::IntakeError;
use crate::telemetry::TelemetryError;

/// Top-level error surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("intake error: {0}")]
    Intake(#[from] IntakeError),
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode decisions: {0}")]
    Encode(#[from] serde_json::Error),
}
