//! CLI error types

use pricer_core::input::InputError;
use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `bs-pricer` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Input(#[from] InputError),

    /// One or more fields are empty or not finite numbers
    #[error("Incomplete input: {}", .fields.join(", "))]
    IncompleteInput { fields: Vec<&'static str> },

    #[error("Sweep of {points} points exceeds the configured limit of {limit}")]
    SweepTooLarge { points: usize, limit: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns `true` if the user should be prompted to correct their input
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, CliError::IncompleteInput { .. })
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_lists_fields() {
        let err = CliError::IncompleteInput {
            fields: vec!["spot", "rate"],
        };
        assert!(err.is_incomplete_input());
        assert_eq!(err.to_string(), "Incomplete input: spot, rate");
    }

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = PricingError::InvalidArgument("bad tag".to_string()).into();
        assert!(!err.is_incomplete_input());
        assert_eq!(err.to_string(), "Invalid argument: bad tag");
    }
}
