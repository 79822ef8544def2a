//! Sweep command implementation
//!
//! The swept field does not need a base value of its own. Whatever was given
//! for it is replaced by the first grid value before the base is built.

use pricer_core::input::{coerce_array, RawValue};
use pricer_core::types::OptionParameters;
use pricer_models::analytical::{SweepParameter, SweepResult, SweepSpec};
use tracing::{debug, info, warn};

use super::inputs::{gate, GRID_FIELDS, OPTION_FIELDS};
use super::{OptionInputs, Report, SweepInputs};
use crate::{CliError, Result};

/// Run the sweep command, refusing grids larger than `max_points`
pub fn run(inputs: &OptionInputs, grid: &SweepInputs, max_points: usize) -> Result<Report> {
    let parameter = grid.parameter.parse::<SweepParameter>().ok();

    let grid_raw = grid.raw();
    let mut base_raw = inputs.raw();
    if let (Some(parameter), Some(start)) = (parameter, grid_raw[0].as_f64()) {
        base_raw[field_index(parameter)] = RawValue::Number(start);
    }

    let names: Vec<&'static str> = OPTION_FIELDS.iter().chain(&GRID_FIELDS).copied().collect();
    let raw: Vec<RawValue> = base_raw.into_iter().chain(grid_raw).collect();
    gate(&names, &raw)?;
    let [spot, strike, volatility, expiry, rate, start, end, step] = coerce_array::<8>(&raw)?;

    let Some(parameter) = parameter else {
        warn!(parameter = %grid.parameter, "Unknown sweep parameter, nothing to compute");
        return Ok(Report::Sweep {
            parameter: grid.parameter.clone(),
            result: SweepResult::empty(),
        });
    };

    let spec = SweepSpec::new(parameter, start, end, step);
    let points = spec.len();
    if points > max_points {
        return Err(CliError::SweepTooLarge {
            points,
            limit: max_points,
        });
    }

    let base = OptionParameters::new(spot, strike, volatility, expiry, rate)?;
    debug!(%parameter, start, end, step, points, "Running sweep");
    let result = spec.run(&base)?;
    info!(points = result.len(), "Sweep complete");

    Ok(Report::Sweep {
        parameter: parameter.symbol().to_string(),
        result,
    })
}

fn field_index(parameter: SweepParameter) -> usize {
    match parameter {
        SweepParameter::Spot => 0,
        SweepParameter::Strike => 1,
        SweepParameter::Volatility => 2,
    }
}
