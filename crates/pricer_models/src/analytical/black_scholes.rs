//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options on a non-dividend-paying underlying.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! When σ ≤ 0 or T ≤ 0, d₁ and d₂ are undefined. Prices then take the
//! zero-volatility limit, the discounted forward intrinsic value
//! max(S - K·e^(-rT), 0) for calls and max(K·e^(-rT) - S, 0) for puts. At T = 0
//! this is the plain intrinsic value.

use pricer_core::types::{OptionParameters, OptionType, PricingError};

use super::distributions::norm_cdf;
use super::greeks::Greeks;

/// Black-Scholes model bound to one set of option parameters.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::analytical::BlackScholes;
///
/// let params = OptionParameters::new(100.0, 100.0, 0.2, 1.0, 0.05).unwrap();
/// let bs = BlackScholes::new(params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = bs.price_call() - bs.price_put() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    params: OptionParameters,
}

impl BlackScholes {
    /// Creates a model over already validated parameters.
    #[inline]
    pub fn new(params: OptionParameters) -> Self {
        Self { params }
    }

    /// Validates raw parameters and creates a model.
    ///
    /// Argument order follows the formula: S, K, σ, r, T.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if spot or strike is not positive or any
    /// value is non-finite.
    pub fn from_parts(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        expiry: f64,
    ) -> Result<Self, PricingError> {
        OptionParameters::new(spot, strike, volatility, expiry, rate).map(Self::new)
    }

    /// Returns the underlying parameters.
    #[inline]
    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    /// Computes d₁ and d₂ together, or `None` in the degenerate region.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
    #[inline]
    pub fn d1_d2(&self) -> Option<(f64, f64)> {
        if self.params.is_degenerate() {
            return None;
        }

        let p = &self.params;
        let vol_sqrt_t = p.volatility() * p.expiry().sqrt();
        let log_moneyness = (p.spot() / p.strike()).ln();
        let drift = (p.rate() + 0.5 * p.volatility() * p.volatility()) * p.expiry();

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        Some((d1, d1 - vol_sqrt_t))
    }

    /// Computes d₁, or `None` when σ ≤ 0 or T ≤ 0.
    #[inline]
    pub fn d1(&self) -> Option<f64> {
        self.d1_d2().map(|(d1, _)| d1)
    }

    /// Computes d₂, or `None` when σ ≤ 0 or T ≤ 0.
    #[inline]
    pub fn d2(&self) -> Option<f64> {
        self.d1_d2().map(|(_, d2)| d2)
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.params.rate() * self.params.expiry()).exp()
    }

    /// Computes the European call price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::from_parts(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
    /// assert!((bs.price_call() - 10.4506).abs() < 1e-4);
    /// ```
    pub fn price_call(&self) -> f64 {
        let spot = self.params.spot();
        let discounted_strike = self.params.strike() * self.discount_factor();

        match self.d1_d2() {
            Some((d1, d2)) => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            None => (spot - discounted_strike).max(0.0),
        }
    }

    /// Computes the European put price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    pub fn price_put(&self) -> f64 {
        let spot = self.params.spot();
        let discounted_strike = self.params.strike() * self.discount_factor();

        match self.d1_d2() {
            Some((d1, d2)) => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
            None => (discounted_strike - spot).max(0.0),
        }
    }

    /// Prices either side of the contract.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.price_call(),
            OptionType::Put => self.price_put(),
        }
    }

    /// Computes the five Greeks for this parameter set.
    #[inline]
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        Greeks::compute(&self.params, option_type)
    }
}

/// Prices a European call from raw scalars (S, K, σ, r, T).
///
/// # Errors
/// `PricingError::InvalidInput` if spot or strike is not positive or any
/// value is non-finite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price_call;
///
/// let price = price_call(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
/// assert!((price - 10.4506).abs() < 1e-4);
///
/// assert!(price_call(100.0, 0.0, 0.2, 0.05, 1.0).is_err());
/// ```
pub fn price_call(
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    expiry: f64,
) -> Result<f64, PricingError> {
    BlackScholes::from_parts(spot, strike, volatility, rate, expiry).map(|bs| bs.price_call())
}

/// Prices a European put from raw scalars (S, K, σ, r, T).
///
/// # Errors
/// Same domain checks as [`price_call`].
pub fn price_put(
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    expiry: f64,
) -> Result<f64, PricingError> {
    BlackScholes::from_parts(spot, strike, volatility, rate, expiry).map(|bs| bs.price_put())
}
