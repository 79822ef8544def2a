//! Command-line front end for the Black-Scholes pricer
//!
//! As part of the **S**ervice layer, this crate gates raw user input through
//! `pricer_core::input`, prices with `pricer_models::analytical`, and renders
//! the results as text, CSV or JSON.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
