//! Analytical Black-Scholes Greeks.
//!
//! Quoting conventions:
//! - Vega per 1 percentage point of volatility (raw vega / 100)
//! - Theta per calendar day (raw theta / 365)
//! - Rho per 1 percentage point of rate (raw rho / 100)
//!
//! When σ ≤ 0 or T ≤ 0 every Greek is exactly zero.

use pricer_core::types::{OptionParameters, OptionType, PricingError};

use super::black_scholes::BlackScholes;
use super::distributions::{norm_cdf, norm_pdf};

/// Divisor turning raw vega and rho into per-1% sensitivities.
pub const PERCENT_SCALE: f64 = 100.0;

/// Divisor turning annual theta into per-day theta.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// The five first-order (and gamma) sensitivities of an option price.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::Greeks;
///
/// let params = OptionParameters::new(100.0, 100.0, 0.2, 1.0, 0.05).unwrap();
/// let call = Greeks::compute(&params, OptionType::Call);
/// let put = Greeks::compute(&params, OptionType::Put);
///
/// assert!((put.delta - (call.delta - 1.0)).abs() < 1e-15);
/// assert_eq!(call.gamma, put.gamma);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1% volatility
    pub vega: f64,
    /// ∂V/∂t per calendar day
    pub theta: f64,
    /// ∂V/∂r per 1% rate
    pub rho: f64,
}

impl Greeks {
    /// All-zero Greeks, returned for degenerate inputs.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes the Greeks of a European option.
    ///
    /// - Gamma = φ(d₁) / (S·σ·√T)
    /// - Vega = S·φ(d₁)·√T / 100
    /// - Call: Delta = N(d₁), Theta = (-(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)) / 365,
    ///   Rho = K·T·e^(-rT)·N(d₂) / 100
    /// - Put: Delta = N(d₁) - 1, Theta = (-(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)) / 365,
    ///   Rho = -K·T·e^(-rT)·N(-d₂) / 100
    pub fn compute(params: &OptionParameters, option_type: OptionType) -> Self {
        let bs = BlackScholes::new(*params);
        let Some((d1, d2)) = bs.d1_d2() else {
            return Self::zero();
        };

        let spot = params.spot();
        let strike = params.strike();
        let volatility = params.volatility();
        let rate = params.rate();
        let expiry = params.expiry();

        let sqrt_t = expiry.sqrt();
        let pdf_d1 = norm_pdf(d1);
        let discount = bs.discount_factor();

        // Shared by both sides of the contract
        let gamma = pdf_d1 / (spot * volatility * sqrt_t);
        let vega = spot * pdf_d1 * sqrt_t / PERCENT_SCALE;
        let decay = -(spot * pdf_d1 * volatility) / (2.0 * sqrt_t);

        let (delta, theta, rho) = match option_type {
            OptionType::Call => {
                let cdf_d2 = norm_cdf(d2);
                (
                    norm_cdf(d1),
                    (decay - rate * strike * discount * cdf_d2) / DAYS_PER_YEAR,
                    strike * expiry * discount * cdf_d2 / PERCENT_SCALE,
                )
            }
            OptionType::Put => {
                let cdf_neg_d2 = norm_cdf(-d2);
                (
                    norm_cdf(d1) - 1.0,
                    (decay + rate * strike * discount * cdf_neg_d2) / DAYS_PER_YEAR,
                    -strike * expiry * discount * cdf_neg_d2 / PERCENT_SCALE,
                )
            }
        };

        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// Returns `true` if all five values are exactly zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Computes Greeks from raw scalars and a textual option type tag.
///
/// Argument order is S, K, T, r, σ.
///
/// The tag is checked first: anything other than `"call"` or `"put"` fails
/// even when the numeric inputs are degenerate. When T ≤ 0 or σ ≤ 0 the result
/// is all zeros regardless of spot and strike.
///
/// # Errors
/// - `PricingError::InvalidArgument` for an unknown option type tag
/// - `PricingError::InvalidInput` for non-positive spot or strike, or
///   non-finite values, in the non-degenerate region
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks;
///
/// let g = greeks(100.0, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
/// assert!(g.delta > 0.5 && g.delta < 1.0);
///
/// assert!(greeks(100.0, 100.0, 0.0, 0.05, 0.2, "put").unwrap().is_zero());
/// assert!(greeks(100.0, 100.0, 1.0, 0.05, 0.2, "invalid_type").is_err());
/// ```
pub fn greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: &str,
) -> Result<Greeks, PricingError> {
    let option_type: OptionType = option_type.parse()?;

    if expiry <= 0.0 || volatility <= 0.0 {
        return Ok(Greeks::zero());
    }

    let params = OptionParameters::new(spot, strike, volatility, expiry, rate)?;
    Ok(Greeks::compute(&params, option_type))
}
