//! Raw input validation and coercion.
//!
//! Values arrive from text fields or numeric widgets before any pricing takes
//! place. This module decides whether a batch of such values is complete and
//! well-formed (`validate`) and converts an accepted batch to `f64`
//! (`coerce`, `coerce_array`).
//!
//! `validate` is the gate: callers suppress all downstream computation when it
//! returns `false`. `coerce` repeats the checks and reports the first offending
//! value, so calling it on unvalidated input is a contract error rather than a
//! panic.
//!
//! # Examples
//!
//! ```
//! use pricer_core::input::{coerce_array, validate, RawValue};
//!
//! // Zero from a numeric widget is a value, not a missing field
//! let raw: Vec<RawValue> = vec![0.0.into(), "1".into(), "2.5".into(), 3.0.into(), " 4 ".into()];
//! assert!(validate(&raw));
//!
//! let [a, b, c, d, e] = coerce_array::<5>(&raw).unwrap();
//! assert_eq!([a, b, c, d, e], [0.0, 1.0, 2.5, 3.0, 4.0]);
//!
//! // An empty text field blocks the whole batch
//! let raw: Vec<RawValue> = vec!["".into(), 1.0.into()];
//! assert!(!validate(&raw));
//! ```

use thiserror::Error;

/// A value as supplied by the caller, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Nothing was entered.
    Empty,
    /// Free text from an input field.
    Text(String),
    /// Output of a numeric widget.
    Number(f64),
}

impl RawValue {
    /// Returns `true` unless the value is `Empty` or whitespace-only text.
    ///
    /// Numeric zero is present.
    pub fn is_present(&self) -> bool {
        match self {
            RawValue::Empty => false,
            RawValue::Text(text) => !text.trim().is_empty(),
            RawValue::Number(_) => true,
        }
    }

    /// Returns the finite `f64` this value denotes, if any.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawValue::Empty => return None,
            RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
            RawValue::Number(number) => *number,
        };
        value.is_finite().then_some(value)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        RawValue::Number(number)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Empty, Into::into)
    }
}

/// Coercion failures.
///
/// Only reachable when `coerce` is called on a batch that `validate` would
/// have rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Value at `index` is empty or blank.
    #[error("Missing value at position {index}")]
    Missing {
        /// Position of the value in the batch
        index: usize,
    },

    /// Value at `index` is not a finite floating-point number.
    #[error("Cannot parse value at position {index} as a finite number: {value:?}")]
    Parse {
        /// Position of the value in the batch
        index: usize,
        /// The offending raw text
        value: String,
    },

    /// Batch length does not match the requested arity.
    #[error("Expected {expected} values, got {got}")]
    Arity {
        /// Required number of values
        expected: usize,
        /// Number of values supplied
        got: usize,
    },
}

/// Returns `true` only if every value is present and denotes a finite number.
///
/// Never panics. An empty batch is trivially valid.
pub fn validate(values: &[RawValue]) -> bool {
    values
        .iter()
        .all(|value| value.is_present() && value.as_f64().is_some())
}

/// Converts every value to `f64`, preserving order.
///
/// # Errors
/// - `InputError::Missing` for the first empty or blank value
/// - `InputError::Parse` for the first value that is not a finite number
pub fn coerce(values: &[RawValue]) -> Result<Vec<f64>, InputError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| coerce_one(index, value))
        .collect()
}

/// Fixed-arity form of [`coerce`].
///
/// # Errors
/// `InputError::Arity` when `values.len() != N`, otherwise as [`coerce`].
pub fn coerce_array<const N: usize>(values: &[RawValue]) -> Result<[f64; N], InputError> {
    if values.len() != N {
        return Err(InputError::Arity {
            expected: N,
            got: values.len(),
        });
    }

    let mut out = [0.0; N];
    for (index, (slot, value)) in out.iter_mut().zip(values).enumerate() {
        *slot = coerce_one(index, value)?;
    }
    Ok(out)
}

fn coerce_one(index: usize, value: &RawValue) -> Result<f64, InputError> {
    if !value.is_present() {
        return Err(InputError::Missing { index });
    }

    value.as_f64().ok_or_else(|| InputError::Parse {
        index,
        value: match value {
            RawValue::Text(text) => text.clone(),
            other => format!("{:?}", other),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<const N: usize>(values: [RawValue; N]) -> Vec<RawValue> {
        values.to_vec()
    }

    // ==========================================================
    // validate
    // ==========================================================

    #[test]
    fn test_validate_accepts_numeric_zero() {
        let values = raw([0.0.into(), 1.0.into(), 2.0.into(), 3.0.into(), 4.0.into()]);
        assert!(validate(&values));
    }

    #[test]
    fn test_validate_accepts_textual_zero() {
        let values = raw(["0".into(), "0.0".into(), "-0".into()]);
        assert!(validate(&values));
    }

    #[test]
    fn test_validate_rejects_empty_text() {
        let values = raw(["".into(), 1.0.into(), 2.0.into(), 3.0.into(), 4.0.into()]);
        assert!(!validate(&values));
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        assert!(!validate(&raw(["   ".into(), "1".into()])));
        assert!(!validate(&raw(["\t\n".into()])));
    }

    #[test]
    fn test_validate_rejects_empty_variant() {
        assert!(!validate(&raw([RawValue::Empty, 1.0.into()])));
        assert!(!validate(&raw([Option::<f64>::None.into()])));
    }

    #[test]
    fn test_validate_rejects_unparseable_text() {
        for text in ["abc", "1,5", "1.2.3", "--1", "1e", "$100"] {
            assert!(!validate(&raw([text.into()])), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_validate_accepts_float_syntax() {
        for text in ["100", "0.2", "-0.01", "1e-3", "  42.5  ", "+7"] {
            assert!(validate(&raw([text.into()])), "{:?} should be accepted", text);
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(!validate(&raw(["NaN".into()])));
        assert!(!validate(&raw(["inf".into()])));
        assert!(!validate(&raw([f64::NAN.into()])));
        assert!(!validate(&raw([f64::NEG_INFINITY.into()])));
    }

    #[test]
    fn test_validate_empty_batch() {
        assert!(validate(&[]));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RawValue::from(Some(1.5)), RawValue::Number(1.5));
        assert_eq!(RawValue::from(Some("x")), RawValue::Text("x".to_string()));
        assert_eq!(RawValue::from(Option::<String>::None), RawValue::Empty);
    }

    // ==========================================================
    // coerce
    // ==========================================================

    #[test]
    fn test_coerce_mixed_values() {
        let values = raw(["100".into(), 95.0.into(), " 0.2 ".into(), "1".into(), 0.0.into()]);
        assert_eq!(coerce(&values).unwrap(), vec![100.0, 95.0, 0.2, 1.0, 0.0]);
    }

    #[test]
    fn test_coerce_reports_missing_position() {
        let values = raw(["1".into(), "".into(), "x".into()]);
        assert_eq!(coerce(&values).unwrap_err(), InputError::Missing { index: 1 });
    }

    #[test]
    fn test_coerce_reports_parse_error() {
        let values = raw(["1".into(), "abc".into()]);
        match coerce(&values).unwrap_err() {
            InputError::Parse { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_coerce_agrees_with_validate() {
        let batches = vec![
            raw(["1".into(), 2.0.into()]),
            raw(["".into()]),
            raw(["nan".into()]),
            raw([0.0.into(), "0".into()]),
        ];
        for batch in batches {
            assert_eq!(validate(&batch), coerce(&batch).is_ok(), "{:?}", batch);
        }
    }

    #[test]
    fn test_coerce_array_arity() {
        let values = raw(["1".into(), "2".into()]);
        assert_eq!(
            coerce_array::<3>(&values).unwrap_err(),
            InputError::Arity {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(coerce_array::<2>(&values).unwrap(), [1.0, 2.0]);
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::Parse {
            index: 2,
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("position 2"));
        assert!(err.to_string().contains("abc"));
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_formatted_finite_values_validate_and_coerce(
                xs in prop::collection::vec(-1e9..1e9_f64, 0..8)
            ) {
                let values: Vec<RawValue> = xs.iter().map(|x| RawValue::from(x.to_string())).collect();
                prop_assert!(validate(&values));
                prop_assert_eq!(coerce(&values).unwrap(), xs);
            }

            #[test]
            fn test_validate_never_panics(text in ".*") {
                let values = vec![RawValue::from(text)];
                let _ = validate(&values);
            }
        }
    }
}
