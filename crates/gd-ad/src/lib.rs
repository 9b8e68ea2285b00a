//! # gd-ad
//!
//! Automatic differentiation (AD) primitives for gammadens.
//!
//! Provides:
//! - [`Scalar`] trait: the arithmetic capability set the density code is written against
//! - **Forward-mode AD** via [`Dual`] numbers, so the same generic density code
//!   yields derivatives with respect to any seeded input

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dual;
pub mod scalar;

pub use dual::Dual;
pub use scalar::Scalar;
