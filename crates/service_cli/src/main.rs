//! bs-pricer - Black-Scholes pricing from the command line
//!
//! # Commands
//!
//! - `bs-pricer price` - Price a European call or put
//! - `bs-pricer greeks` - Compute delta, gamma, vega, theta and rho
//! - `bs-pricer sweep` - Price a call over a grid of spot, volatility or strike

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use service_cli::commands::{execute, Command};
use service_cli::config::{build_config, CliArgs, ENV_FORMAT, ENV_LOG_LEVEL, ENV_MAX_SWEEP_POINTS};
use service_cli::render::render;
use service_cli::CliError;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code when the input needs correcting
const EXIT_INCOMPLETE_INPUT: u8 = 2;

/// Black-Scholes option pricer
#[derive(Parser, Debug)]
#[command(name = "bs-pricer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = ENV_LOG_LEVEL)]
    log_level: Option<String>,

    /// Output format (text, csv, json)
    #[arg(short, long, global = true, env = ENV_FORMAT)]
    format: Option<String>,

    /// Decimal places for prices
    #[arg(long, global = true)]
    price_decimals: Option<usize>,

    /// Decimal places for Greeks
    #[arg(long, global = true)]
    greek_decimals: Option<usize>,

    /// Largest sweep grid to evaluate
    #[arg(long, global = true, env = ENV_MAX_SWEEP_POINTS)]
    max_sweep_points: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            format: self.format.clone(),
            price_decimals: self.price_decimals,
            greek_decimals: self.greek_decimals,
            max_sweep_points: self.max_sweep_points,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        version = service_cli::VERSION,
        format = %config.format,
        price_decimals = config.price_decimals,
        greek_decimals = config.greek_decimals,
        max_sweep_points = config.max_sweep_points,
        "Configuration loaded"
    );

    let report = match execute(&cli.command, &config) {
        Ok(report) => report,
        Err(CliError::IncompleteInput { fields }) => {
            eprintln!(
                "Please enter a valid number in every field. Check: {}",
                fields.join(", ")
            );
            return Ok(ExitCode::from(EXIT_INCOMPLETE_INPUT));
        }
        Err(err) => return Err(err.into()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&report, &config, &mut out)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
