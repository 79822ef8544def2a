//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - One-parameter price sweeps
//!
//! ## Design Principles
//!
//! - **Numerical Stability**: Normal CDF through statrs `erfc` (absolute error near 1e-11)
//! - **Quoting conventions**: Vega and Rho per 1%, Theta per calendar day

pub mod black_scholes;
pub mod distributions;
pub mod greeks;
pub mod sweep;

// Re-export main types at module level
pub use black_scholes::{price_call, price_put, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use greeks::{greeks, Greeks};
pub use sweep::{sweep, SweepParameter, SweepResult, SweepSpec};
