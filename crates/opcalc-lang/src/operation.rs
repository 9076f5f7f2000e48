//! Operation contract and the built-in binary operations.
//!
//! Each operation is its own unit struct; new ones are added by implementing
//! [Operation] and registering an instance, never by editing the registry or calculator.

use crate::error::CalcError;
use std::fmt;

/// A named binary numeric transformation `a ∘ b`.
pub trait Operation: fmt::Debug + Send + Sync {
    /// Symbol the operation is registered under, e.g. "+" or "^".
    fn symbol(&self) -> &str;

    /// Apply the operation to `a` and `b`.
    fn execute(&self, a: f64, b: f64) -> Result<f64, CalcError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Add;

impl Operation for Add {
    fn symbol(&self) -> &str {
        "+"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(a + b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subtract;

impl Operation for Subtract {
    fn symbol(&self) -> &str {
        "-"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(a - b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiply;

impl Operation for Multiply {
    fn symbol(&self) -> &str {
        "*"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(a * b)
    }
}

/// Division; a zero divisor (either sign) is [CalcError::DivisionByZero], never ±∞.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Divide;

impl Operation for Divide {
    fn symbol(&self) -> &str {
        "/"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}

/// Real exponentiation via [f64::powf].
///
/// Not part of the default registry. Inputs outside the real domain are not
/// rejected: a negative base with a fractional exponent gives NaN, and
/// `0 ^ negative` gives +∞.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Power;

impl Operation for Power {
    fn symbol(&self) -> &str {
        "^"
    }

    fn execute(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(a.powf(b))
    }
}
