//! Report rendering
//!
//! Text and CSV output is rounded to the configured number of decimals. JSON
//! output carries full precision.

use std::io::Write;

use pricer_models::analytical::{Greeks, SweepParameter, SweepResult};

use crate::commands::Report;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Column header for sweep prices
pub const PRICE_COLUMN: &str = "call_price";

/// Decimals kept for swept parameter values before trailing zeros are dropped
const GRID_DECIMALS: usize = 10;

/// Write `report` to `out` in the configured format
pub fn render<W: Write>(report: &Report, config: &CliConfig, out: &mut W) -> Result<()> {
    match config.format {
        OutputFormat::Text => render_text(report, config, out),
        OutputFormat::Csv => render_csv(report, config, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Render into a `String`
pub fn render_to_string(report: &Report, config: &CliConfig) -> Result<String> {
    let mut buf = Vec::new();
    render(report, config, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn greek_rows(greeks: &Greeks) -> [(&'static str, &'static str, f64); 5] {
    [
        ("delta", "Delta (Δ)", greeks.delta),
        ("gamma", "Gamma (Γ)", greeks.gamma),
        ("vega", "Vega (ν)", greeks.vega),
        ("theta", "Theta (Θ)", greeks.theta),
        ("rho", "Rho (ρ)", greeks.rho),
    ]
}

fn render_text<W: Write>(report: &Report, config: &CliConfig, out: &mut W) -> Result<()> {
    let price_dp = config.price_decimals;
    match report {
        Report::Price {
            option_type, price, ..
        } => {
            writeln!(out, "Black-Scholes {} price is: {:.*}", option_type, price_dp, price)?;
        }
        Report::Greeks { greeks, .. } => {
            for (_, label, value) in greek_rows(greeks) {
                writeln!(out, "{:<10} {:.*}", format!("{}:", label), config.greek_decimals, value)?;
            }
        }
        Report::Sweep { parameter, result } => {
            write_sweep_text(parameter, result, price_dp, out)?;
        }
    }
    Ok(())
}

fn write_sweep_text<W: Write>(
    parameter: &str,
    result: &SweepResult,
    price_dp: usize,
    out: &mut W,
) -> Result<()> {
    if let Ok(known) = parameter.parse::<SweepParameter>() {
        writeln!(out, "Call price sensitivity to {}", known.label())?;
    }
    writeln!(out, "{:>12}  {:>14}", parameter, PRICE_COLUMN)?;
    for (value, price) in result.points() {
        writeln!(out, "{:>12}  {:>14.*}", grid_value(value), price_dp, price)?;
    }
    Ok(())
}

/// Grid values accumulate float noise (0.1 + 2 * 0.1), so round before display
fn grid_value(value: f64) -> String {
    let fixed = format!("{:.*}", GRID_DECIMALS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

fn render_csv<W: Write>(report: &Report, config: &CliConfig, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    match report {
        Report::Price {
            option_type, price, ..
        } => {
            writer.write_record(["option_type", "price"])?;
            writer.write_record([
                option_type.to_string(),
                format!("{:.*}", config.price_decimals, price),
            ])?;
        }
        Report::Greeks { greeks, .. } => {
            let rows = greek_rows(greeks);
            writer.write_record(rows.iter().map(|(name, _, _)| *name))?;
            writer.write_record(
                rows.iter()
                    .map(|(_, _, value)| format!("{:.*}", config.greek_decimals, value)),
            )?;
        }
        Report::Sweep { parameter, result } => {
            writer.write_record([parameter.as_str(), PRICE_COLUMN])?;
            for (value, price) in result.points() {
                writer.write_record([
                    grid_value(value),
                    format!("{:.*}", config.price_decimals, price),
                ])?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
