//! Forward-mode automatic differentiation via dual numbers.
//!
//! A `Dual` carries a primal value and one tangent. Seed the input of
//! interest with [`Dual::var`] (tangent 1), everything else with
//! [`Dual::constant`], and the tangent of the output is the derivative.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An f64 dual number for forward-mode AD.
///
/// `val` holds the primal value, `dot` holds the derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    /// Primal (function) value.
    pub val: f64,
    /// Tangent (derivative) value.
    pub dot: f64,
}

impl Dual {
    /// Create a constant (derivative = 0).
    #[inline]
    pub fn constant(val: f64) -> Self {
        Self { val, dot: 0.0 }
    }

    /// Create an independent variable (derivative = 1).
    #[inline]
    pub fn var(val: f64) -> Self {
        Self { val, dot: 1.0 }
    }

    /// Create a dual with explicit tangent.
    #[inline]
    pub fn new(val: f64, dot: f64) -> Self {
        Self { val, dot }
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    #[inline]
    pub fn ln(self) -> Self {
        Self { val: self.val.ln(), dot: self.dot / self.val }
    }

    /// Exponential: d/dx exp(x) = exp(x).
    #[inline]
    pub fn exp(self) -> Self {
        let e = self.val.exp();
        Self { val: e, dot: self.dot * e }
    }
}

// --- Arithmetic: Dual op Dual ---

impl Add for Dual {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { val: self.val + rhs.val, dot: self.dot + rhs.dot }
    }
}

impl Sub for Dual {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { val: self.val - rhs.val, dot: self.dot - rhs.dot }
    }
}

impl Mul for Dual {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { val: self.val * rhs.val, dot: self.dot * rhs.val + self.val * rhs.dot }
    }
}

impl Div for Dual {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self {
            val: self.val / rhs.val,
            dot: (self.dot * rhs.val - self.val * rhs.dot) / (rhs.val * rhs.val),
        }
    }
}

impl Neg for Dual {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { val: -self.val, dot: -self.dot }
    }
}

// --- Arithmetic: Dual op f64 ---

impl Add<f64> for Dual {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self { val: self.val + rhs, dot: self.dot }
    }
}

impl Sub<f64> for Dual {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self { val: self.val - rhs, dot: self.dot }
    }
}

impl Mul<f64> for Dual {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self { val: self.val * rhs, dot: self.dot * rhs }
    }
}

impl Div<f64> for Dual {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self { val: self.val / rhs, dot: self.dot / rhs }
    }
}

// --- Arithmetic: f64 op Dual ---

impl Add<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        rhs + self
    }
}

impl Sub<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual { val: self - rhs.val, dot: -rhs.dot }
    }
}

impl Mul<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        rhs * self
    }
}

impl Div<Dual> for f64 {
    type Output = Dual;
    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        Dual { val: self / rhs.val, dot: -self * rhs.dot / (rhs.val * rhs.val) }
    }
}

// --- Sum ---

impl Sum for Dual {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(0.0), |acc, x| acc + x)
    }
}

// --- PartialOrd ---

impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_has_zero_derivative() {
        let c = Dual::constant(5.0);
        assert_eq!(c.val, 5.0);
        assert_eq!(c.dot, 0.0);
    }

    #[test]
    fn test_var_has_unit_derivative() {
        let x = Dual::var(3.0);
        assert_eq!(x.val, 3.0);
        assert_eq!(x.dot, 1.0);
    }

    #[test]
    fn test_ln_derivative() {
        let y = Dual::var(2.0).ln();
        assert_relative_eq!(y.val, 2.0_f64.ln(), epsilon = 1e-15);
        assert_relative_eq!(y.dot, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_exp_derivative() {
        let y = Dual::var(1.0).exp();
        assert_relative_eq!(y.val, std::f64::consts::E, epsilon = 1e-15);
        assert_relative_eq!(y.dot, std::f64::consts::E, epsilon = 1e-15);
    }

    #[test]
    fn test_quotient_rule() {
        // d/dx [1 / (x + 1)] = -1 / (x + 1)^2
        let x = Dual::var(3.0);
        let y = Dual::constant(1.0) / (x + 1.0);
        assert_relative_eq!(y.val, 0.25, epsilon = 1e-15);
        assert_relative_eq!(y.dot, -1.0 / 16.0, epsilon = 1e-15);

        let z = 1.0 / (x + 1.0);
        assert_eq!(y, z);
    }

    #[test]
    fn test_mixed_f64_ops() {
        // d/dx [(2 - x) * 3 + x / 4] = -3 + 0.25
        let x = Dual::var(1.5);
        let y = (2.0 - x) * 3.0 + x / 4.0;
        assert_relative_eq!(y.val, 1.5 + 0.375, epsilon = 1e-15);
        assert_relative_eq!(y.dot, -2.75, epsilon = 1e-15);
    }

    #[test]
    fn test_sum_accumulates_tangents() {
        let xs = [Dual::var(1.0), Dual::constant(2.0), Dual::new(3.0, 0.5)];
        let s: Dual = xs.iter().copied().sum();
        assert_eq!(s.val, 6.0);
        assert_eq!(s.dot, 1.5);
    }

    #[test]
    fn test_ordering_uses_primal() {
        assert!(Dual::new(1.0, 100.0) < Dual::new(2.0, -100.0));
    }
}
