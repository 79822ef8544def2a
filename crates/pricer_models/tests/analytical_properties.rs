//! Property-based and end-to-end tests for the analytical pricer.
//!
//! Exercises the public API the way a presentation layer would: raw values
//! are validated and coerced, then priced, differentiated, or swept.

use approx::assert_relative_eq;
use pricer_core::input::{coerce_array, validate, RawValue};
use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::{greeks, price_call, price_put, sweep, BlackScholes, Greeks};
use proptest::prelude::*;

// ==========================================================
// Golden values
// ==========================================================

#[test]
fn test_golden_atm_call() {
    let price = price_call(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
    assert_relative_eq!(price, 10.4506, epsilon = 1e-4);
}

#[test]
fn test_golden_from_raw_text() {
    let raw: Vec<RawValue> = ["100", "100", "0.2", "0.05", "1"]
        .into_iter()
        .map(RawValue::from)
        .collect();
    assert!(validate(&raw));

    let [spot, strike, volatility, rate, expiry] = coerce_array::<5>(&raw).unwrap();
    let price = price_call(spot, strike, volatility, rate, expiry).unwrap();
    assert_eq!(format!("{:.5}", price), "10.45058");
}

#[test]
fn test_zero_rate_is_valid_input() {
    let raw: Vec<RawValue> = vec![
        100.0.into(),
        100.0.into(),
        0.2.into(),
        0.0.into(),
        1.0.into(),
    ];
    assert!(validate(&raw));
    let [spot, strike, volatility, rate, expiry] = coerce_array::<5>(&raw).unwrap();
    assert!(price_call(spot, strike, volatility, rate, expiry).unwrap() > 0.0);
}

#[test]
fn test_greeks_display_precision() {
    let g = greeks(100.0, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
    let shown: Vec<String> = [g.delta, g.gamma, g.vega, g.theta, g.rho]
        .iter()
        .map(|v| format!("{:.4}", v))
        .collect();
    assert_eq!(shown, vec!["0.6368", "0.0188", "0.3752", "-0.0176", "0.5323"]);
}

#[test]
fn test_sweep_reference_example() {
    let base = OptionParameters::new(100.0, 100.0, 0.2, 1.0, 0.05).unwrap();
    let curve = sweep("S", &base, 50.0, 60.0, 2.0).unwrap();
    assert_eq!(curve.values, vec![50.0, 52.0, 54.0, 56.0, 58.0]);
    assert_eq!(curve.prices.len(), 5);
    for (spot, price) in curve.points() {
        assert_eq!(price, price_call(spot, 100.0, 0.2, 0.05, 1.0).unwrap());
    }
    assert!(sweep("unknown_param", &base, 50.0, 60.0, 2.0).unwrap().is_empty());
}

// ==========================================================
// Properties
// ==========================================================

fn d1(spot: f64, strike: f64, vol: f64, rate: f64, expiry: f64) -> f64 {
    BlackScholes::from_parts(spot, strike, vol, rate, expiry)
        .ok()
        .and_then(|bs| bs.d1())
        .unwrap_or(f64::NEG_INFINITY)
}

fn spot_strategy() -> impl Strategy<Value = f64> {
    20.0..500.0_f64
}

fn vol_strategy() -> impl Strategy<Value = f64> {
    0.05..1.0_f64
}

fn expiry_strategy() -> impl Strategy<Value = f64> {
    0.05..5.0_f64
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    -0.05..0.15_f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_call_increasing_in_spot(
        spot in spot_strategy(),
        strike in spot_strategy(),
        vol in vol_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
    ) {
        // Far out of the money the price underflows to zero at both points
        prop_assume!(d1(spot, strike, vol, rate, expiry) > -4.0);
        let bump = spot * 0.01;
        let low = price_call(spot, strike, vol, rate, expiry).unwrap();
        let high = price_call(spot + bump, strike, vol, rate, expiry).unwrap();
        prop_assert!(high > low, "C({}) = {} not < C({}) = {}", spot, low, spot + bump, high);
    }

    #[test]
    fn test_call_decreasing_in_strike(
        spot in spot_strategy(),
        strike in spot_strategy(),
        vol in vol_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
    ) {
        let bump = strike * 0.01;
        prop_assume!(d1(spot, strike + bump, vol, rate, expiry) > -4.0);
        let low_strike = price_call(spot, strike, vol, rate, expiry).unwrap();
        let high_strike = price_call(spot, strike + bump, vol, rate, expiry).unwrap();
        prop_assert!(high_strike < low_strike);
    }

    #[test]
    fn test_put_call_parity(
        spot in spot_strategy(),
        strike in spot_strategy(),
        vol in vol_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
    ) {
        let call = price_call(spot, strike, vol, rate, expiry).unwrap();
        let put = price_put(spot, strike, vol, rate, expiry).unwrap();
        let forward = spot - strike * (-rate * expiry).exp();
        prop_assert!((call - put - forward).abs() < 1e-9 * spot.max(strike));
    }

    #[test]
    fn test_put_delta_is_call_delta_minus_one(
        spot in spot_strategy(),
        strike in spot_strategy(),
        vol in vol_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
    ) {
        let call = greeks(spot, strike, expiry, rate, vol, "call").unwrap();
        let put = greeks(spot, strike, expiry, rate, vol, "put").unwrap();
        prop_assert_eq!(put.delta, call.delta - 1.0);
    }

    #[test]
    fn test_degenerate_greeks_are_zero(
        spot in spot_strategy(),
        strike in spot_strategy(),
        vol in vol_strategy(),
        rate in rate_strategy(),
        call in any::<bool>(),
    ) {
        let tag = if call { "call" } else { "put" };
        prop_assert_eq!(greeks(spot, strike, 0.0, rate, vol, tag).unwrap(), Greeks::zero());
        prop_assert_eq!(greeks(spot, strike, 1.0, rate, 0.0, tag).unwrap(), Greeks::zero());
    }

    #[test]
    fn test_gamma_and_vega_non_negative(
        spot in spot_strategy(),
        strike in spot_strategy(),
        vol in vol_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
    ) {
        let params = OptionParameters::new(spot, strike, vol, expiry, rate).unwrap();
        let g = BlackScholes::new(params).greeks(OptionType::Call);
        prop_assert!(g.gamma >= 0.0);
        prop_assert!(g.vega >= 0.0);
    }

    #[test]
    fn test_sweep_sequences_aligned(
        start in 10.0..200.0_f64,
        width in 0.0..100.0_f64,
        step in -5.0..20.0_f64,
    ) {
        prop_assume!(step <= 0.0 || step >= 0.1);
        let base = OptionParameters::new(100.0, 100.0, 0.2, 1.0, 0.05).unwrap();
        let curve = sweep("K", &base, start, start + width, step).unwrap();
        prop_assert_eq!(curve.values.len(), curve.prices.len());
        prop_assert!(curve.values.iter().all(|&k| k >= start && k < start + width));
        if step <= 0.0 {
            prop_assert!(curve.is_empty());
        }
    }
}
