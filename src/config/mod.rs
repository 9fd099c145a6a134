use std::env;

use crate::admission::AdmissionConfig;

/// Top-level runtime configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub batch: BatchConfig,
    pub admission: AdmissionConfig,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Worker-pool sizing and progress cadence for batch runs.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub workers: usize,
    pub progress_every: usize,
}

impl AppConfig {
    /// Load configuration, letting environment variables override the policy
    /// defaults. Unknown variables are ignored; known variables with
    /// unparseable values are hard errors.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let workers = read_env("ADMISSION_WORKERS")?.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        });
        let progress_every = read_env("ADMISSION_PROGRESS_EVERY")?.unwrap_or(500);

        let mut admission = AdmissionConfig::default();
        if let Some(score) = read_env("ADMISSION_MIN_TRAINING_SCORE")? {
            admission.min_training_score = score;
        }
        if let Some(days) = read_env("ADMISSION_EXPIRY_URGENT_DAYS")? {
            admission.expiry_urgent_days = days;
        }
        if let Some(days) = read_env("ADMISSION_EXPIRY_WARNING_DAYS")? {
            admission.expiry_warning_days = days;
        }

        if admission.expiry_warning_days < admission.expiry_urgent_days {
            return Err(ConfigError::ThresholdOrder {
                urgent: admission.expiry_urgent_days,
                warning: admission.expiry_warning_days,
            });
        }

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            batch: BatchConfig {
                workers,
                progress_every,
            },
            admission,
        })
    }
}

fn read_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        Err(_) => Ok(None),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be numeric, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("expiry warning window ({warning}d) must not be shorter than the urgent window ({urgent}d)")]
    ThresholdOrder { urgent: i64, warning: i64 },
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
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("ADMISSION_WORKERS");
        env::remove_var("ADMISSION_PROGRESS_EVERY");
        env::remove_var("ADMISSION_MIN_TRAINING_SCORE");
        env::remove_var("ADMISSION_EXPIRY_URGENT_DAYS");
        env::remove_var("ADMISSION_EXPIRY_WARNING_DAYS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.batch.progress_every, 500);
        assert_eq!(config.admission.min_training_score, 80);
        assert_eq!(config.admission.expiry_urgent_days, 7);
        assert_eq!(config.admission.expiry_warning_days, 30);
    }

    #[test]
    fn env_overrides_policy_thresholds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ADMISSION_MIN_TRAINING_SCORE", "90");
        env::set_var("ADMISSION_EXPIRY_URGENT_DAYS", "3");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.admission.min_training_score, 90);
        assert_eq!(config.admission.expiry_urgent_days, 3);
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ADMISSION_WORKERS", "many");
        let err = AppConfig::load().expect_err("non-numeric worker count rejected");
        assert!(matches!(err, ConfigError::InvalidNumber { key, .. } if key == "ADMISSION_WORKERS"));
        reset_env();
    }

    #[test]
    fn rejects_inverted_expiry_windows() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ADMISSION_EXPIRY_URGENT_DAYS", "45");
        let err = AppConfig::load().expect_err("urgent window beyond warning window rejected");
        assert!(matches!(err, ConfigError::ThresholdOrder { .. }));
        reset_env();
    }
}
