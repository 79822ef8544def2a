//! One-parameter price sweeps.
//!
//! A sweep holds four of the five Black-Scholes inputs fixed, steps the fifth
//! across a half-open range `[start, end)`, and prices a call at every point.
//! The result is the data behind a price-versus-parameter curve.
//!
//! Range semantics follow stepped-range conventions: `end` is never included,
//! even when it is reachable exactly, and a non-positive step yields no points.
//!
//! # Examples
//! ```
//! use pricer_core::types::OptionParameters;
//! use pricer_models::analytical::sweep;
//!
//! let base = OptionParameters::new(100.0, 100.0, 0.2, 1.0, 0.05).unwrap();
//! let curve = sweep("S", &base, 50.0, 60.0, 2.0).unwrap();
//! assert_eq!(curve.values, vec![50.0, 52.0, 54.0, 56.0, 58.0]);
//! assert_eq!(curve.prices.len(), 5);
//!
//! // Unknown parameter names produce an empty curve, not an error
//! assert!(sweep("r", &base, 0.0, 0.1, 0.01).unwrap().is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{OptionParameters, PricingError};

use super::black_scholes::BlackScholes;

const PREALLOCATE_LIMIT: usize = 1 << 16;

/// Input that a sweep can vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SweepParameter {
    /// Spot price (S)
    Spot,
    /// Volatility (σ)
    Volatility,
    /// Strike price (K)
    Strike,
}

impl SweepParameter {
    /// Short symbol used on the command line and in column headers.
    pub fn symbol(&self) -> &'static str {
        match self {
            SweepParameter::Spot => "S",
            SweepParameter::Volatility => "sigma",
            SweepParameter::Strike => "K",
        }
    }

    /// Human-readable axis label.
    pub fn label(&self) -> &'static str {
        match self {
            SweepParameter::Spot => "Spot price (S)",
            SweepParameter::Volatility => "Volatility (sigma)",
            SweepParameter::Strike => "Strike price (K)",
        }
    }

    /// Returns `base` with this parameter replaced by `value`.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if the substituted value leaves the domain.
    pub fn substitute(
        &self,
        base: &OptionParameters,
        value: f64,
    ) -> Result<OptionParameters, PricingError> {
        match self {
            SweepParameter::Spot => base.with_spot(value),
            SweepParameter::Volatility => base.with_volatility(value),
            SweepParameter::Strike => base.with_strike(value),
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for SweepParameter {
    type Err = PricingError;

    /// Accepts the symbols `S`, `sigma`, `K` or the names `spot`,
    /// `volatility`, `strike`.
    fn from_str(s: &str) -> Result<Self, PricingError> {
        match s.trim() {
            "S" | "spot" => Ok(SweepParameter::Spot),
            "sigma" | "volatility" => Ok(SweepParameter::Volatility),
            "K" | "strike" => Ok(SweepParameter::Strike),
            other => Err(PricingError::InvalidArgument(format!(
                "unknown sweep parameter '{}', expected one of S, sigma, K",
                other
            ))),
        }
    }
}

/// Half-open grid over one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSpec {
    /// Parameter being varied
    pub parameter: SweepParameter,
    /// First grid value (inclusive)
    pub start: f64,
    /// Upper bound (exclusive)
    pub end: f64,
    /// Distance between grid values, must be positive
    pub step: f64,
}

impl SweepSpec {
    /// Creates a sweep specification. Any bounds are accepted; invalid ones
    /// simply yield an empty grid.
    pub fn new(parameter: SweepParameter, start: f64, end: f64, step: f64) -> Self {
        Self {
            parameter,
            start,
            end,
            step,
        }
    }

    /// Number of grid values.
    ///
    /// Zero when `step <= 0`, `end <= start`, or a bound is non-finite.
    pub fn len(&self) -> usize {
        let (start, end, step) = (self.start, self.end, self.step);
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return 0;
        }
        if step <= 0.0 || end <= start {
            return 0;
        }

        // Correct the rounded quotient so that exactly the points below `end` count
        let mut n = ((end - start) / step).ceil() as usize;
        while n > 0 && self.point(n - 1) >= end {
            n -= 1;
        }
        while n < usize::MAX && self.point(n) < end {
            n += 1;
        }
        n
    }

    /// Returns `true` if the grid has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the grid values `start + i * step` in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    /// Prices a call at every grid value, holding the other inputs of `base` fixed.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` at the first grid value that leaves the
    /// domain, e.g. a spot or strike of zero.
    pub fn run(&self, base: &OptionParameters) -> Result<SweepResult, PricingError> {
        let n = self.len().min(PREALLOCATE_LIMIT);
        let mut result = SweepResult {
            values: Vec::with_capacity(n),
            prices: Vec::with_capacity(n),
        };

        for value in self.values() {
            let params = self.parameter.substitute(base, value)?;
            result.values.push(value);
            result.prices.push(BlackScholes::new(params).price_call());
        }

        Ok(result)
    }

    #[inline]
    fn point(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }
}

/// Index-aligned parameter values and call prices.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    /// Swept parameter values
    pub values: Vec<f64>,
    /// Call price at each value
    pub prices: Vec<f64>,
}

impl SweepResult {
    /// Result with no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(value, price)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied().zip(self.prices.iter().copied())
    }
}

/// Sweeps the parameter named by `parameter` over `[start, end)`.
///
/// `parameter` is one of `S`, `sigma`, `K` (see [`SweepParameter`]). Any other
/// name performs no sweep and returns an empty result.
///
/// # Errors
/// `PricingError::InvalidInput` if a grid value leaves the domain.
pub fn sweep(
    parameter: &str,
    base: &OptionParameters,
    start: f64,
    end: f64,
    step: f64,
) -> Result<SweepResult, PricingError> {
    match parameter.parse::<SweepParameter>() {
        Ok(parameter) => SweepSpec::new(parameter, start, end, step).run(base),
        Err(_) => Ok(SweepResult::empty()),
    }
}
