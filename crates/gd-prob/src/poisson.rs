//! Poisson distribution.

use gd_ad::Scalar;

use crate::lgamma::loggamma;

/// PMF of Poisson(`lambda`) at count `x`, generalized to real `x >= 0`.
///
/// `log P = -lambda + x*ln(lambda) - lnΓ(x+1)`
///
/// Returns the log-probability when `give_log` is true (conventional
/// default: `false`). Parameters are not checked.
pub fn dpois<S: Scalar>(x: S, lambda: S, give_log: bool) -> S {
    let logres = -lambda + x * lambda.ln() - loggamma(x + S::from_f64(1.0));
    if give_log { logres } else { logres.exp() }
}
