//! Negative binomial distribution.
//!
//! Counts failures `x` before `size` successes with success probability
//! `prob`. The count is generalized to real `x >= 0` through the gamma
//! function.

use gd_ad::Scalar;

use crate::lgamma::loggamma;

/// PMF of a Negative Binomial parameterized by `size` (n) and `prob` (p).
///
/// `log P = lnΓ(x+n) - lnΓ(n) - lnΓ(x+1) + n*ln(p) + x*ln(1-p)`
///
/// - `size > 0`
/// - `0 < prob < 1`
/// - `x >= 0`
///
/// Returns the log-probability when `give_log` is true, the probability
/// otherwise (conventional default: `false`). Parameters are not checked.
pub fn dnbinom<S: Scalar>(x: S, size: S, prob: S, give_log: bool) -> S {
    let one = S::from_f64(1.0);
    let logres = loggamma(x + size) - loggamma(size) - loggamma(x + one)
        + size * prob.ln()
        + x * (one - prob).ln();
    if give_log { logres } else { logres.exp() }
}

/// PMF of a Negative Binomial parameterized by mean `mu` and variance `var`.
///
/// Requires `var > mu > 0` (overdispersion). Maps to `prob = mu / var` and
/// `size = mu * prob / (1 - prob)`, then evaluates [`dnbinom`].
pub fn dnbinom2<S: Scalar>(x: S, mu: S, var: S, give_log: bool) -> S {
    let p = mu / var;
    let n = mu * p / (S::from_f64(1.0) - p);
    dnbinom(x, n, p, give_log)
}
