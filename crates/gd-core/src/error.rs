//! Error types for gammadens.
//!
//! The numeric core in `gd-prob` never produces these: out-of-domain inputs
//! propagate as non-finite scalars. Errors only come from the validated
//! wrappers.

use thiserror::Error;

/// gammadens error type
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter outside the distribution's domain
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let e = Error::Validation("prob must be in (0,1), got 1.5".to_string());
        assert_eq!(e.to_string(), "Validation error: prob must be in (0,1), got 1.5");
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn host() -> anyhow::Result<()> {
            let r: Result<()> = Err(Error::Validation("lambda must be finite and > 0, got 0".into()));
            Ok(r?)
        }
        let err = host().unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Validation(_))));
    }
}
