//! Probability building blocks for gammadens.
//!
//! Every function here is generic over [`gd_ad::Scalar`], so the same code
//! evaluates plain `f64` log-likelihoods and forward-mode gradients through
//! [`gd_ad::Dual`]:
//! - [`lgamma`]: Lanczos (g=7, N=8) approximation of `ln Γ(y)`
//! - per-distribution densities built on it ([`neg_binomial`], [`poisson`], [`gamma`])
//! - [`distributions`]: parameter-validating wrappers for untrusted inputs
//!
//! The densities take a `give_log` flag. The conventional value is `false`
//! (linear scale); `true` returns the log-density. All work happens in log
//! space and `exp` is only applied as the final step.
//!
//! The core functions never validate and never fail: out-of-domain inputs
//! propagate through `ln`/`exp`/division as non-finite values.

pub mod distributions;
pub mod gamma;
pub mod lgamma;
pub mod neg_binomial;
pub mod poisson;

pub use gamma::{dgamma, dlgamma};
pub use lgamma::loggamma;
pub use neg_binomial::{dnbinom, dnbinom2};
pub use poisson::dpois;
