//! Parameter-validating wrappers around the core densities.
//!
//! The core functions in this crate never check their inputs, which keeps
//! them cheap inside gradient loops. Hosts that take parameters from users
//! call these instead: each one checks the domain on the primal values and
//! then delegates, so a successful result is identical to the core call.

use gd_ad::Scalar;
use gd_core::{Error, Result};

fn finite<S: Scalar>(name: &str, v: S) -> Result<f64> {
    let v = v.value();
    if !v.is_finite() {
        return Err(Error::Validation(format!("{} must be finite, got {}", name, v)));
    }
    Ok(v)
}

fn positive<S: Scalar>(name: &str, v: S) -> Result<()> {
    let v = finite(name, v)?;
    if v <= 0.0 {
        return Err(Error::Validation(format!("{} must be finite and > 0, got {}", name, v)));
    }
    Ok(())
}

fn non_negative<S: Scalar>(name: &str, v: S) -> Result<()> {
    let v = finite(name, v)?;
    if v < 0.0 {
        return Err(Error::Validation(format!("{} must be finite and >= 0, got {}", name, v)));
    }
    Ok(())
}

/// `ln Γ(y)` for `y > 0`.
pub fn loggamma_checked<S: Scalar>(y: S) -> Result<S> {
    positive("y", y)?;
    Ok(crate::lgamma::loggamma(y))
}

/// Negative binomial PMF with `size > 0`, `0 < prob < 1`, `x >= 0`.
pub fn dnbinom_checked<S: Scalar>(x: S, size: S, prob: S, give_log: bool) -> Result<S> {
    non_negative("x", x)?;
    positive("size", size)?;
    let p = finite("prob", prob)?;
    if p <= 0.0 || p >= 1.0 {
        return Err(Error::Validation(format!("prob must be finite and in (0,1), got {}", p)));
    }
    Ok(crate::neg_binomial::dnbinom(x, size, prob, give_log))
}

/// Negative binomial PMF by mean and variance, with `var > mu > 0`, `x >= 0`.
pub fn dnbinom2_checked<S: Scalar>(x: S, mu: S, var: S, give_log: bool) -> Result<S> {
    non_negative("x", x)?;
    positive("mu", mu)?;
    let v = finite("var", var)?;
    if v <= mu.value() {
        return Err(Error::Validation(format!(
            "var must be finite and > mu ({}), got {}",
            mu.value(),
            v
        )));
    }
    Ok(crate::neg_binomial::dnbinom2(x, mu, var, give_log))
}

/// Poisson PMF with `lambda > 0`, `x >= 0`.
pub fn dpois_checked<S: Scalar>(x: S, lambda: S, give_log: bool) -> Result<S> {
    non_negative("x", x)?;
    positive("lambda", lambda)?;
    Ok(crate::poisson::dpois(x, lambda, give_log))
}

/// Gamma density with `shape > 0`, `scale > 0`, `y > 0`.
pub fn dgamma_checked<S: Scalar>(y: S, shape: S, scale: S, give_log: bool) -> Result<S> {
    positive("y", y)?;
    positive("shape", shape)?;
    positive("scale", scale)?;
    Ok(crate::gamma::dgamma(y, shape, scale, give_log))
}

/// Log-gamma density with `shape > 0`, `scale > 0`, finite `y`.
pub fn dlgamma_checked<S: Scalar>(y: S, shape: S, scale: S, give_log: bool) -> Result<S> {
    finite("y", y)?;
    positive("shape", shape)?;
    positive("scale", scale)?;
    Ok(crate::gamma::dlgamma(y, shape, scale, give_log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gd_ad::Dual;

    #[test]
    fn test_valid_inputs_match_core() {
        assert_eq!(loggamma_checked(4.5).unwrap(), crate::loggamma(4.5));
        assert_eq!(dnbinom_checked(2.0, 5.0, 0.5, false).unwrap(), crate::dnbinom(2.0, 5.0, 0.5, false));
        assert_eq!(dnbinom2_checked(3.0, 2.0, 5.0, true).unwrap(), crate::dnbinom2(3.0, 2.0, 5.0, true));
        assert_eq!(dpois_checked(3.0, 2.0, false).unwrap(), crate::dpois(3.0, 2.0, false));
        assert_eq!(dgamma_checked(1.5, 2.0, 3.0, true).unwrap(), crate::dgamma(1.5, 2.0, 3.0, true));
        assert_eq!(dlgamma_checked(-0.5, 2.0, 3.0, true).unwrap(), crate::dlgamma(-0.5, 2.0, 3.0, true));
    }

    #[test]
    fn test_dual_passes_through_untouched() {
        let lam = Dual::var(4.0);
        let checked = dpois_checked(Dual::constant(7.0), lam, true).unwrap();
        let core = crate::dpois(Dual::constant(7.0), lam, true);
        assert_eq!(checked, core);
    }

    #[test]
    fn test_invalid_params() {
        assert!(loggamma_checked(0.0).is_err());
        assert!(loggamma_checked(f64::NAN).is_err());

        assert!(dnbinom_checked(-1.0, 5.0, 0.5, false).is_err());
        assert!(dnbinom_checked(1.0, 0.0, 0.5, false).is_err());
        assert!(dnbinom_checked(1.0, 5.0, 0.0, false).is_err());
        assert!(dnbinom_checked(1.0, 5.0, 1.0, false).is_err());

        assert!(dnbinom2_checked(1.0, 0.0, 1.0, false).is_err());
        assert!(dnbinom2_checked(1.0, 2.0, 2.0, false).is_err());
        assert!(dnbinom2_checked(1.0, 2.0, f64::INFINITY, false).is_err());

        assert!(dpois_checked(1.0, 0.0, false).is_err());
        assert!(dpois_checked(f64::INFINITY, 1.0, false).is_err());

        assert!(dgamma_checked(0.0, 2.0, 1.0, false).is_err());
        assert!(dgamma_checked(1.0, -2.0, 1.0, false).is_err());
        assert!(dgamma_checked(1.0, 2.0, 0.0, false).is_err());

        assert!(dlgamma_checked(f64::NEG_INFINITY, 2.0, 1.0, false).is_err());
        assert!(dlgamma_checked(1.0, 2.0, -1.0, false).is_err());
    }

    #[test]
    fn test_error_names_parameter() {
        let err = dnbinom_checked(1.0, 5.0, 1.5, true).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: prob must be finite and in (0,1), got 1.5");

        let err = dgamma_checked(1.0, 2.0, -3.0, true).unwrap_err();
        assert!(err.to_string().contains("scale"), "unexpected message: {}", err);
    }
}
