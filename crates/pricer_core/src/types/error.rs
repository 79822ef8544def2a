//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter construction and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: A numeric parameter lies outside the model domain
/// - `InvalidArgument`: A textual tag (option type, sweep parameter) is not recognised
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("spot must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: spot must be positive");
///
/// let err = PricingError::InvalidArgument("unknown option type 'straddle'".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: unknown option type 'straddle'");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Numeric parameter outside the model domain (non-positive spot or strike,
    /// non-finite value).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unrecognised argument tag.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PricingError {
    /// Returns `true` for domain violations of numeric inputs.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }

    /// Returns `true` for unrecognised argument tags.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }
}
