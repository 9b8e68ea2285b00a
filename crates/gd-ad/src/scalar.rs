//! [`Scalar`] trait: abstraction over `f64` and [`Dual`](crate::dual::Dual)
//! that lets the log-gamma and density code be written once, then reused
//! for both plain evaluation **and** forward-mode gradient computation.

use crate::dual::Dual;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar type suitable for log-likelihood computation.
///
/// The capability set is deliberately small: arithmetic, `ln`, `exp` and
/// lifting of `f64` literals. Generic code must build every intermediate
/// from these so that derivative-carrying types stay exact.
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sum
    + PartialOrd
    + Sized
{
    /// Wrap an `f64` constant (derivative = 0 for AD types).
    fn from_f64(v: f64) -> Self;

    /// Extract the primal (function) value.
    fn value(&self) -> f64;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;
}

// --- f64 implementation ---

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }
}

// --- Dual implementation ---

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.val
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        Dual::exp(self)
    }
}
