//! # pricer_core: Foundation types for the Black-Scholes pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option types: `OptionType`, `OptionParameters` (`types::option`)
//! - Error types: `PricingError` (`types::error`)
//! - Raw input validation and coercion: `validate`, `coerce` (`input`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::input::{coerce_array, validate, RawValue};
//! use pricer_core::types::OptionParameters;
//!
//! let raw: Vec<RawValue> = vec!["100".into(), "100".into(), "0.2".into(), "1".into(), "0.05".into()];
//! assert!(validate(&raw));
//!
//! let [spot, strike, volatility, expiry, rate] = coerce_array::<5>(&raw).unwrap();
//! let params = OptionParameters::new(spot, strike, volatility, expiry, rate).unwrap();
//! assert_eq!(params.volatility(), 0.2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType` and `OptionParameters`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod input;
pub mod types;
