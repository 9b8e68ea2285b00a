//! Dispatch from CLI subcommands to the generic density functions.
//!
//! Every function is evaluated through the same generic path: once with
//! `f64` for the value and, when a gradient is requested, once per input
//! with a seeded [`Dual`].

use gd_ad::{Dual, Scalar};
use gd_core::Result;
use gd_prob::distributions;

/// One of the functions the CLI can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `ln Γ(y)`
    LogGamma,
    /// Negative binomial, size/prob form
    NegBinom,
    /// Negative binomial, mean/variance form
    NegBinomMeanVar,
    /// Poisson
    Poisson,
    /// Gamma density, shape/scale
    Gamma,
    /// Density of `ln X`, `X ~ Gamma(shape, scale)`
    LogGammaDensity,
}

impl Function {
    /// Subcommand name, also reported as `"function"` in the JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Function::LogGamma => "loggamma",
            Function::NegBinom => "dnbinom",
            Function::NegBinomMeanVar => "dnbinom2",
            Function::Poisson => "dpois",
            Function::Gamma => "dgamma",
            Function::LogGammaDensity => "dlgamma",
        }
    }

    /// Input names, in the order `eval` expects them.
    pub fn inputs(self) -> &'static [&'static str] {
        match self {
            Function::LogGamma => &["y"],
            Function::NegBinom => &["x", "size", "prob"],
            Function::NegBinomMeanVar => &["x", "mu", "var"],
            Function::Poisson => &["x", "lambda"],
            Function::Gamma | Function::LogGammaDensity => &["y", "shape", "scale"],
        }
    }

    /// Evaluate at `args` (same order as [`Function::inputs`]).
    ///
    /// `give_log` is ignored for `loggamma`, which is always on the log scale.
    pub fn eval<S: Scalar>(self, args: &[S], give_log: bool, checked: bool) -> Result<S> {
        debug_assert_eq!(args.len(), self.inputs().len());
        let v = match (self, checked) {
            (Function::LogGamma, true) => distributions::loggamma_checked(args[0])?,
            (Function::LogGamma, false) => gd_prob::loggamma(args[0]),
            (Function::NegBinom, true) => {
                distributions::dnbinom_checked(args[0], args[1], args[2], give_log)?
            }
            (Function::NegBinom, false) => gd_prob::dnbinom(args[0], args[1], args[2], give_log),
            (Function::NegBinomMeanVar, true) => {
                distributions::dnbinom2_checked(args[0], args[1], args[2], give_log)?
            }
            (Function::NegBinomMeanVar, false) => {
                gd_prob::dnbinom2(args[0], args[1], args[2], give_log)
            }
            (Function::Poisson, true) => distributions::dpois_checked(args[0], args[1], give_log)?,
            (Function::Poisson, false) => gd_prob::dpois(args[0], args[1], give_log),
            (Function::Gamma, true) => {
                distributions::dgamma_checked(args[0], args[1], args[2], give_log)?
            }
            (Function::Gamma, false) => gd_prob::dgamma(args[0], args[1], args[2], give_log),
            (Function::LogGammaDensity, true) => {
                distributions::dlgamma_checked(args[0], args[1], args[2], give_log)?
            }
            (Function::LogGammaDensity, false) => {
                gd_prob::dlgamma(args[0], args[1], args[2], give_log)
            }
        };
        Ok(v)
    }

    /// Forward-mode gradient: one evaluation per input with that input seeded.
    pub fn gradient(self, args: &[f64], give_log: bool, checked: bool) -> Result<Vec<f64>> {
        let mut grad = Vec::with_capacity(args.len());
        for seed in 0..args.len() {
            let mut xs: Vec<Dual> = args.iter().copied().map(Dual::constant).collect();
            xs[seed].dot = 1.0;
            grad.push(self.eval(&xs, give_log, checked)?.dot);
        }
        Ok(grad)
    }
}

/// Evaluate `f` and assemble the JSON result object.
pub fn evaluate(
    f: Function,
    args: &[f64],
    give_log: bool,
    grad: bool,
    checked: bool,
) -> Result<serde_json::Value> {
    let value = f.eval(args, give_log, checked)?;
    tracing::debug!(function = f.name(), value, "evaluated");

    let inputs: serde_json::Map<String, serde_json::Value> =
        f.inputs().iter().zip(args).map(|(n, v)| (n.to_string(), serde_json::json!(v))).collect();

    let mut out = serde_json::json!({
        "function": f.name(),
        "inputs": inputs,
        "give_log": give_log || f == Function::LogGamma,
        "value": value,
    });

    if grad {
        let g = f.gradient(args, give_log, checked)?;
        tracing::debug!(function = f.name(), gradient = ?g, "gradient");
        let gradient: serde_json::Map<String, serde_json::Value> =
            f.inputs().iter().zip(&g).map(|(n, v)| (n.to_string(), serde_json::json!(v))).collect();
        out["gradient"] = serde_json::Value::Object(gradient);
    }

    Ok(out)
}
