//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Unknown question id: {0}")]
    UnknownQuestionId(String),

    #[error("Plan score out of range (1-10): {0}")]
    PlanScoreOutOfRange(u8),

    #[error("Priority thresholds must be strictly descending")]
    ThresholdsNotDescending,

    #[error("Severe multiplier cutoff must be greater than 1")]
    InvalidSevereCutoff,

    #[error("Display multipliers must be at least 1.0")]
    DisplayMultiplierTooSmall,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validation_error_displays_reason() {
        let err = ConfigValidationError::UnknownQuestionId("wait_time".to_string());
        assert_eq!(format!("{}", err), "Unknown question id: wait_time");
    }
}
