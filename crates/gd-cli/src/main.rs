//! gammadens CLI

mod eval;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::eval::Function;

#[derive(Parser)]
#[command(name = "gammadens")]
#[command(about = "gammadens - Lanczos log-gamma and count/gamma densities")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every evaluation subcommand.
#[derive(Args)]
struct EvalOpts {
    /// Also report the derivative with respect to every input (forward-mode AD).
    #[arg(long)]
    grad: bool,

    /// Skip parameter validation; out-of-domain inputs yield non-finite values (null).
    #[arg(long)]
    unchecked: bool,

    /// Output file for results (pretty JSON). Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// ln Γ(y) via the Lanczos approximation
    Loggamma {
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        #[command(flatten)]
        opts: EvalOpts,
    },

    /// Negative binomial PMF (size/prob form)
    Dnbinom {
        /// Failure count (real-valued, >= 0)
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Number of successes (> 0)
        #[arg(long, allow_negative_numbers = true)]
        size: f64,

        /// Success probability in (0,1)
        #[arg(long, allow_negative_numbers = true)]
        prob: f64,

        /// Return the log-probability
        #[arg(long)]
        log: bool,

        #[command(flatten)]
        opts: EvalOpts,
    },

    /// Negative binomial PMF (mean/variance form, var > mu)
    Dnbinom2 {
        /// Failure count (real-valued, >= 0)
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Mean (> 0)
        #[arg(long, allow_negative_numbers = true)]
        mu: f64,

        /// Variance (> mu)
        #[arg(long, allow_negative_numbers = true)]
        var: f64,

        /// Return the log-probability
        #[arg(long)]
        log: bool,

        #[command(flatten)]
        opts: EvalOpts,
    },

    /// Poisson PMF
    Dpois {
        /// Count (real-valued, >= 0)
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Rate (> 0)
        #[arg(long, allow_negative_numbers = true)]
        lambda: f64,

        /// Return the log-probability
        #[arg(long)]
        log: bool,

        #[command(flatten)]
        opts: EvalOpts,
    },

    /// Gamma density (shape/scale)
    Dgamma {
        /// Point of evaluation (> 0)
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Shape (> 0)
        #[arg(long, allow_negative_numbers = true)]
        shape: f64,

        /// Scale (> 0)
        #[arg(long, allow_negative_numbers = true)]
        scale: f64,

        /// Return the log-density
        #[arg(long)]
        log: bool,

        #[command(flatten)]
        opts: EvalOpts,
    },

    /// Density of ln X where X ~ Gamma(shape, scale)
    Dlgamma {
        /// Point of evaluation (any finite real)
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Shape (> 0)
        #[arg(long, allow_negative_numbers = true)]
        shape: f64,

        /// Scale (> 0)
        #[arg(long, allow_negative_numbers = true)]
        scale: f64,

        /// Return the log-density
        #[arg(long)]
        log: bool,

        #[command(flatten)]
        opts: EvalOpts,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Loggamma { y, opts } => cmd_eval(Function::LogGamma, &[y], true, &opts),
        Commands::Dnbinom { x, size, prob, log, opts } => {
            cmd_eval(Function::NegBinom, &[x, size, prob], log, &opts)
        }
        Commands::Dnbinom2 { x, mu, var, log, opts } => {
            cmd_eval(Function::NegBinomMeanVar, &[x, mu, var], log, &opts)
        }
        Commands::Dpois { x, lambda, log, opts } => {
            cmd_eval(Function::Poisson, &[x, lambda], log, &opts)
        }
        Commands::Dgamma { y, shape, scale, log, opts } => {
            cmd_eval(Function::Gamma, &[y, shape, scale], log, &opts)
        }
        Commands::Dlgamma { y, shape, scale, log, opts } => {
            cmd_eval(Function::LogGammaDensity, &[y, shape, scale], log, &opts)
        }
        Commands::Version => {
            println!("gammadens {}", gd_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_eval(f: Function, args: &[f64], give_log: bool, opts: &EvalOpts) -> Result<()> {
    tracing::info!(
        function = f.name(),
        give_log,
        grad = opts.grad,
        checked = !opts.unchecked,
        "evaluating"
    );

    let out = match eval::evaluate(f, args, give_log, opts.grad, !opts.unchecked) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(function = f.name(), error = %e, "rejected inputs");
            return Err(e.into());
        }
    };

    write_json(opts.output.as_ref(), out)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
        tracing::info!(path = %path.display(), "wrote result");
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
