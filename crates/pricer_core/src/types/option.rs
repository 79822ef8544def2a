//! Option contract types.
//!
//! This module provides:
//! - `OptionType`: Call or put
//! - `OptionParameters`: The five scalar inputs of the Black-Scholes formula
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.2, 1.0, 0.05).unwrap();
//! assert_eq!(params.spot(), 100.0);
//! assert!(!params.is_degenerate());
//!
//! let put: OptionType = "put".parse().unwrap();
//! assert_eq!(put, OptionType::Put);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Type of European option.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionType;
///
/// // Parse from string (case-insensitive)
/// let call: OptionType = "CALL".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
///
/// // Anything else is rejected rather than defaulted
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns the lowercase tag for this option type.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `"call"` or `"put"` (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, PricingError> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidArgument(format!(
                "unknown option type '{}', expected 'call' or 'put'",
                s
            ))),
        }
    }
}

/// Black-Scholes inputs for a single European option.
///
/// Spot and strike must be strictly positive and every field finite, so that
/// `ln(S/K)` is always defined. Volatility and expiry may be zero or negative;
/// pricing treats that region as degenerate (see [`OptionParameters::is_degenerate`]).
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionParameters;
///
/// // Negative rates are allowed
/// assert!(OptionParameters::new(100.0, 95.0, 0.25, 0.5, -0.01).is_ok());
///
/// // Non-positive strike is not
/// assert!(OptionParameters::new(100.0, 0.0, 0.25, 0.5, 0.01).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry: f64,
    rate: f64,
}

impl OptionParameters {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Current price of the underlying (S), must be positive
    /// * `strike` - Strike price (K), must be positive
    /// * `volatility` - Annualised volatility (σ)
    /// * `expiry` - Time to expiration in years (T)
    /// * `rate` - Continuously compounded risk-free rate (r), any sign
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if any value is non-finite, or if spot or
    /// strike is not strictly positive.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        expiry: f64,
        rate: f64,
    ) -> Result<Self, PricingError> {
        for (name, value) in [
            ("spot", spot),
            ("strike", strike),
            ("volatility", volatility),
            ("expiry", expiry),
            ("rate", rate),
        ] {
            if !value.is_finite() {
                return Err(PricingError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if spot <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "spot must be positive, got S = {}",
                spot
            )));
        }

        if strike <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "strike must be positive, got K = {}",
                strike
            )));
        }

        Ok(Self {
            spot,
            strike,
            volatility,
            expiry,
            rate,
        })
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns `true` when σ ≤ 0 or T ≤ 0, where d1 and d2 are undefined.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.volatility <= 0.0 || self.expiry <= 0.0
    }

    /// Copy with a different spot.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(spot, self.strike, self.volatility, self.expiry, self.rate)
    }

    /// Copy with a different strike.
    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, strike, self.volatility, self.expiry, self.rate)
    }

    /// Copy with a different volatility.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, volatility, self.expiry, self.rate)
    }
}
