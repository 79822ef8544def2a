//! Greeks command implementation

use pricer_core::types::OptionType;
use pricer_models::analytical::greeks;
use tracing::{debug, info};

use super::{OptionInputs, Report};
use crate::Result;

/// Run the greeks command
///
/// Degenerate inputs (zero volatility or expiry) yield all-zero sensitivities
/// whatever the spot and strike, so the values are not domain-checked here.
pub fn run(inputs: &OptionInputs, option_type: &str) -> Result<Report> {
    let parameters = inputs.values()?;
    debug!(?parameters, option_type, "Computing Greeks");

    let greeks = greeks(
        parameters.spot,
        parameters.strike,
        parameters.expiry,
        parameters.rate,
        parameters.volatility,
        option_type,
    )?;
    if greeks.is_zero() {
        info!("Degenerate inputs, Greeks are zero");
    }

    Ok(Report::Greeks {
        option_type: option_type.parse::<OptionType>()?,
        parameters,
        greeks,
    })
}
