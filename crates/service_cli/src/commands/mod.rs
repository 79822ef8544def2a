//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands return a
//! [`Report`] and never write to stdout themselves; see [`crate::render`].

pub mod greeks;
pub mod inputs;
pub mod price;
pub mod sweep;

use clap::Subcommand;
use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::{Greeks, SweepResult};
use serde::Serialize;

use crate::config::CliConfig;
use crate::Result;

pub use inputs::{OptionInputs, OptionValues, SweepInputs};

/// Subcommands of `bs-pricer`
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Price a European option
    Price {
        #[command(flatten)]
        inputs: OptionInputs,

        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: String,
    },

    /// Compute delta, gamma, vega, theta and rho
    Greeks {
        #[command(flatten)]
        inputs: OptionInputs,

        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: String,
    },

    /// Price a call over a grid of one parameter
    Sweep {
        #[command(flatten)]
        inputs: OptionInputs,

        #[command(flatten)]
        grid: SweepInputs,
    },
}

/// Outcome of a command, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Report {
    Price {
        option_type: OptionType,
        parameters: OptionParameters,
        price: f64,
    },
    Greeks {
        option_type: OptionType,
        parameters: OptionValues,
        greeks: Greeks,
    },
    Sweep {
        /// Parameter name as given on the command line
        parameter: String,
        result: SweepResult,
    },
}

/// Run `command` under `config`
pub fn execute(command: &Command, config: &CliConfig) -> Result<Report> {
    match command {
        Command::Price {
            inputs,
            option_type,
        } => price::run(inputs, option_type),
        Command::Greeks {
            inputs,
            option_type,
        } => greeks::run(inputs, option_type),
        Command::Sweep { inputs, grid } => sweep::run(inputs, grid, config.max_sweep_points),
    }
}
