//! Gamma distribution and the distribution of its logarithm.

use gd_ad::Scalar;

use crate::lgamma::loggamma;

/// Density of `X ~ Gamma(shape, scale)` at `y`.
///
/// `log f = -lnΓ(shape) + (shape-1)*ln(y) - y/scale - shape*ln(scale)`
///
/// Parameterization:
/// - `shape > 0`
/// - `scale > 0`
///
/// Support: `y > 0`.
///
/// Returns the log-density when `give_log` is true (conventional default:
/// `false`). Parameters are not checked.
pub fn dgamma<S: Scalar>(y: S, shape: S, scale: S, give_log: bool) -> S {
    let logres = -loggamma(shape) + (shape - S::from_f64(1.0)) * y.ln()
        - y / scale
        - shape * scale.ln();
    if give_log { logres } else { logres.exp() }
}

/// Density of `Y = ln X` where `X ~ Gamma(shape, scale)`, at `y`.
///
/// Change of variables with `dX = e^Y dY`:
/// `log f = -lnΓ(shape) - shape*ln(scale) - e^y/scale + shape*y`
///
/// Support is the whole real line. Returns the log-density when `give_log`
/// is true (conventional default: `false`). Parameters are not checked.
pub fn dlgamma<S: Scalar>(y: S, shape: S, scale: S, give_log: bool) -> S {
    let logres = -loggamma(shape) - shape * scale.ln() - y.exp() / scale + shape * y;
    if give_log { logres } else { logres.exp() }
}
