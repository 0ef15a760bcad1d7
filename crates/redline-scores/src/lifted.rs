//! Lifted arithmetic over possibly-unknown values.
//!
//! A [`Metric`] is either a finite number or unknown. Every operation
//! propagates unknown operands, and any result that would be infinite or NaN
//! (including division by zero) collapses to unknown. Formulas built from
//! metrics therefore never panic and never fabricate a value.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A finite `f64` or unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Metric(Option<f64>);

impl Metric {
    /// The unknown value.
    pub const UNKNOWN: Self = Self(None);

    /// Wrap a number; non-finite input becomes unknown.
    pub const fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(Some(value))
        } else {
            Self::UNKNOWN
        }
    }

    /// The underlying value, if known.
    pub const fn value(self) -> Option<f64> {
        self.0
    }

    /// True when the value is known.
    pub const fn is_known(self) -> bool {
        self.0.is_some()
    }

    /// Divide by `denominator`; a zero or unknown denominator gives unknown.
    pub fn ratio(self, denominator: Self) -> Self {
        match (self.0, denominator.0) {
            (Some(n), Some(d)) if d != 0.0 => Self::new(n / d),
            _ => Self::UNKNOWN,
        }
    }

    /// Combine two known values, otherwise unknown.
    pub fn zip_with(self, other: Self, f: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Self::new(f(a, b)),
            _ => Self::UNKNOWN,
        }
    }

    /// Compare two known values, otherwise unknown.
    pub fn compare(self, other: Self, f: impl FnOnce(f64, f64) -> bool) -> Option<bool> {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Some(f(a, b)),
            _ => None,
        }
    }

    /// `Some(self > other)` when both are known.
    pub fn gt(self, other: Self) -> Option<bool> {
        self.compare(other, |a, b| a > b)
    }

    /// `Some(self < other)` when both are known.
    pub fn lt(self, other: Self) -> Option<bool> {
        self.compare(other, |a, b| a < b)
    }

    /// `Some(self <= other)` when both are known.
    pub fn le(self, other: Self) -> Option<bool> {
        self.compare(other, |a, b| a <= b)
    }

    /// Sum of weighted terms; unknown if any term is unknown.
    pub fn weighted_sum(terms: &[(f64, Self)]) -> Self {
        terms
            .iter()
            .try_fold(0.0, |acc, (weight, term)| term.0.map(|v| acc + weight * v))
            .map_or(Self::UNKNOWN, Self::new)
    }

    /// Round half away from zero to `decimals` places.
    pub fn round_to(self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        match self.0 {
            Some(v) => Self::new((v * scale).round() / scale),
            None => Self::UNKNOWN,
        }
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::UNKNOWN, Self::new)
    }
}

impl From<Metric> for Option<f64> {
    fn from(metric: Metric) -> Self {
        metric.0
    }
}

impl Add for Metric {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Metric {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for Metric {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Mul<f64> for Metric {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self * Self::new(rhs)
    }
}

impl Neg for Metric {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(|v| -v))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_non_finite_is_unknown() {
        assert_eq!(Metric::new(f64::NAN), Metric::UNKNOWN);
        assert_eq!(Metric::new(f64::INFINITY), Metric::UNKNOWN);
        assert_eq!(Metric::from(Some(f64::NEG_INFINITY)), Metric::UNKNOWN);
        assert!(Metric::new(0.0).is_known());
    }

    #[test]
    fn test_ratio() {
        assert_eq!(Metric::new(1.0).ratio(Metric::new(0.0)), Metric::UNKNOWN);
        assert_eq!(Metric::new(1.0).ratio(Metric::UNKNOWN), Metric::UNKNOWN);
        assert_eq!(Metric::UNKNOWN.ratio(Metric::new(2.0)), Metric::UNKNOWN);
        assert_relative_eq!(
            Metric::new(1.0).ratio(Metric::new(4.0)).value().unwrap(),
            0.25
        );
    }

    #[test]
    fn test_arithmetic_propagates_unknown() {
        let known = Metric::new(2.0);
        assert_eq!(known + Metric::UNKNOWN, Metric::UNKNOWN);
        assert_eq!(Metric::UNKNOWN - known, Metric::UNKNOWN);
        assert_eq!(known * Metric::UNKNOWN, Metric::UNKNOWN);
        assert_eq!((known * 3.0).value(), Some(6.0));
        assert_eq!((-known).value(), Some(-2.0));
        assert_eq!(Metric::new(f64::MAX) * 10.0, Metric::UNKNOWN);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(Metric::new(2.0).gt(Metric::new(1.0)), Some(true));
        assert_eq!(Metric::new(1.0).lt(Metric::new(1.0)), Some(false));
        assert_eq!(Metric::new(1.0).le(Metric::new(1.0)), Some(true));
        assert_eq!(Metric::new(1.0).gt(Metric::UNKNOWN), None);
    }

    #[test]
    fn test_weighted_sum() {
        let sum = Metric::weighted_sum(&[(2.0, Metric::new(1.0)), (0.5, Metric::new(4.0))]);
        assert_relative_eq!(sum.value().unwrap(), 4.0);

        let partial = Metric::weighted_sum(&[(2.0, Metric::new(1.0)), (1.0, Metric::UNKNOWN)]);
        assert_eq!(partial, Metric::UNKNOWN);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(Metric::new(1.234_56).round_to(4).value(), Some(1.2346));
        assert_eq!(Metric::new(-0.000_000_4).round_to(6).value(), Some(-0.0));
        assert_eq!(Metric::UNKNOWN.round_to(4), Metric::UNKNOWN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Metric::new(1.5).to_string(), "1.5");
        assert_eq!(Metric::UNKNOWN.to_string(), "n/a");
    }
}
