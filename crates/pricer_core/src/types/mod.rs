//! Option contract and error types.
//!
//! This module provides:
//! - `option`: `OptionType` and `OptionParameters`
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`], [`OptionParameters`] from `option`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;

pub use error::PricingError;
pub use option::{OptionParameters, OptionType};
