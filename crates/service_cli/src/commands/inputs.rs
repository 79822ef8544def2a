//! Raw numeric flags shared by the commands
//!
//! Every number arrives as text so that an empty or malformed flag reaches
//! [`pricer_core::input::validate`] instead of being rejected by clap.

use clap::Args;
use pricer_core::input::{coerce_array, validate, RawValue};
use pricer_core::types::OptionParameters;
use serde::Serialize;

use crate::{CliError, Result};

/// Names of the option fields, in [`OptionInputs::raw`] order
pub const OPTION_FIELDS: [&str; 5] = ["spot", "strike", "volatility", "expiry", "rate"];

/// Names of the sweep grid fields, in [`SweepInputs::raw`] order
pub const GRID_FIELDS: [&str; 3] = ["start", "end", "step"];

/// Option inputs as typed by the user
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct OptionInputs {
    /// Spot price of the underlying (S)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub spot: Option<String>,

    /// Strike price (K)
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    pub strike: Option<String>,

    /// Annualised volatility (sigma)
    #[arg(short = 'v', long, allow_hyphen_values = true)]
    pub volatility: Option<String>,

    /// Time to expiry in years (T)
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    pub expiry: Option<String>,

    /// Continuously compounded risk-free rate (r)
    #[arg(short = 'r', long, allow_hyphen_values = true)]
    pub rate: Option<String>,
}

impl OptionInputs {
    /// Build inputs from five strings, mainly for tests
    pub fn from_text(spot: &str, strike: &str, volatility: &str, expiry: &str, rate: &str) -> Self {
        Self {
            spot: Some(spot.to_string()),
            strike: Some(strike.to_string()),
            volatility: Some(volatility.to_string()),
            expiry: Some(expiry.to_string()),
            rate: Some(rate.to_string()),
        }
    }

    /// Raw values in [`OPTION_FIELDS`] order
    pub fn raw(&self) -> [RawValue; 5] {
        [
            self.spot.clone().into(),
            self.strike.clone().into(),
            self.volatility.clone().into(),
            self.expiry.clone().into(),
            self.rate.clone().into(),
        ]
    }

    /// Gate and convert to numbers, without any domain check
    ///
    /// # Errors
    /// `CliError::IncompleteInput` naming every empty or malformed field
    pub fn values(&self) -> Result<OptionValues> {
        let raw = self.raw();
        gate(&OPTION_FIELDS, &raw)?;
        let [spot, strike, volatility, expiry, rate] = coerce_array::<5>(&raw)?;
        Ok(OptionValues {
            spot,
            strike,
            volatility,
            expiry,
            rate,
        })
    }

    /// Gate and convert to [`OptionParameters`]
    ///
    /// # Errors
    /// - `CliError::IncompleteInput` naming every empty or malformed field
    /// - `CliError::Pricing` if the values leave the pricing domain
    pub fn parameters(&self) -> Result<OptionParameters> {
        let values = self.values()?;
        Ok(OptionParameters::new(
            values.spot,
            values.strike,
            values.volatility,
            values.expiry,
            values.rate,
        )?)
    }
}

/// Coerced option inputs that have not been domain-checked
///
/// Zero spot or strike is representable here, for requests whose answer does
/// not depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionValues {
    pub spot: f64,
    pub strike: f64,
    pub volatility: f64,
    pub expiry: f64,
    pub rate: f64,
}

/// Sweep grid inputs as typed by the user
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SweepInputs {
    /// Parameter to sweep (S, sigma, K)
    #[arg(short = 'p', long)]
    pub parameter: String,

    /// First grid value (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Grid bound (exclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Grid spacing
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<String>,
}

impl SweepInputs {
    /// Raw values in [`GRID_FIELDS`] order
    pub fn raw(&self) -> [RawValue; 3] {
        [
            self.start.clone().into(),
            self.end.clone().into(),
            self.step.clone().into(),
        ]
    }
}

/// Fail with the names of every rejected value unless the whole batch validates
pub(crate) fn gate(names: &[&'static str], raw: &[RawValue]) -> Result<()> {
    if validate(raw) {
        return Ok(());
    }

    let fields = names
        .iter()
        .zip(raw)
        .filter(|(_, value)| !validate(std::slice::from_ref(*value)))
        .map(|(name, _)| *name)
        .collect();
    Err(CliError::IncompleteInput { fields })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_from_text() {
        let inputs = OptionInputs::from_text("100", " 95 ", "0.2", "1", "0");
        let params = inputs.parameters().unwrap();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 95.0);
        assert_eq!(params.rate(), 0.0);
    }

    #[test]
    fn test_missing_and_malformed_fields_are_named() {
        let inputs = OptionInputs {
            spot: None,
            volatility: Some("abc".to_string()),
            rate: Some("   ".to_string()),
            ..OptionInputs::from_text("1", "100", "0.2", "1", "0.05")
        };
        match inputs.parameters() {
            Err(CliError::IncompleteInput { fields }) => {
                assert_eq!(fields, vec!["spot", "volatility", "rate"]);
            }
            other => panic!("expected incomplete input, got {:?}", other),
        }
    }

    #[test]
    fn test_values_skip_domain_check() {
        let inputs = OptionInputs::from_text("0", "0", "0.2", "0", "-0.01");
        let values = inputs.values().unwrap();
        assert_eq!(values.spot, 0.0);
        assert_eq!(values.expiry, 0.0);
        assert_eq!(values.rate, -0.01);
    }

    #[test]
    fn test_domain_violation_is_pricing_error() {
        let inputs = OptionInputs::from_text("0", "100", "0.2", "1", "0.05");
        assert!(matches!(inputs.parameters(), Err(CliError::Pricing(_))));
    }

    #[test]
    fn test_non_finite_text_is_incomplete() {
        let inputs = OptionInputs::from_text("inf", "100", "0.2", "1", "NaN");
        match inputs.parameters() {
            Err(CliError::IncompleteInput { fields }) => assert_eq!(fields, vec!["spot", "rate"]),
            other => panic!("expected incomplete input, got {:?}", other),
        }
    }
}
