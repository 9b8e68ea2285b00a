//! # gd-core
//!
//! Shared foundations for the gammadens crates:
//! - [`Error`] / [`Result`] used by every fallible API in the workspace
//! - [`VERSION`] reported by hosts such as the CLI

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};

/// Workspace version (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
