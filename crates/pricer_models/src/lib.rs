//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form European option pricing under Black-Scholes.
//!
//! This crate provides:
//! - Standard normal CDF and PDF
//! - Call and put prices
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Parameter sweeps producing price-versus-parameter curves
//!
//! ## Design Principles
//!
//! - **Validated inputs**: every entry point works on `OptionParameters`, so
//!   `ln(S/K)` is always defined
//! - **Explicit degenerate policy**: σ ≤ 0 or T ≤ 0 never produce NaN
//! - **Pure functions**: no state, no I/O

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
