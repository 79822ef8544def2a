//! Price command implementation

use pricer_core::types::OptionType;
use pricer_models::analytical::BlackScholes;
use tracing::{debug, info};

use super::{OptionInputs, Report};
use crate::Result;

/// Run the price command
pub fn run(inputs: &OptionInputs, option_type: &str) -> Result<Report> {
    let parameters = inputs.parameters()?;
    let option_type: OptionType = option_type.parse()?;
    debug!(?parameters, %option_type, "Pricing option");

    let price = BlackScholes::new(parameters).price(option_type);
    info!(price, "Pricing complete");

    Ok(Report::Price {
        option_type,
        parameters,
        price,
    })
}
