//! Error types for dequad.
//!
//! A single `thiserror`-derived enum covers everything the quadrature engine
//! can report. Argument checks go through the [`ensure!`](crate::ensure)
//! macro defined here.

use thiserror::Error;

/// The top-level error type used throughout dequad.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A configuration value or an interval bound is out of its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The integrand could not be evaluated at `x`.
    ///
    /// The engine never raises this itself; it exists so that integrands
    /// passed to the fallible entry points can report failure with the
    /// crate's own error type.
    #[error("integrand evaluation failed at x = {x}: {reason}")]
    Integrand {
        /// Abscissa at which evaluation failed.
        x: f64,
        /// Caller-supplied description.
        reason: String,
    },
}

/// Shorthand `Result` type used throughout dequad.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dq_core::{ensure, errors::Error};
/// fn positive(x: f64) -> dq_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(
///     positive(-1.0),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_step(h: f64) -> Result<f64> {
        ensure!(h.is_finite() && h > 0.0, "step must be positive, got {h}");
        Ok(h)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(check_step(0.5), Ok(0.5));
    }

    #[test]
    fn ensure_reports_invalid_argument() {
        let err = check_step(f64::NAN).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid argument: step must be positive, got NaN");
    }

    #[test]
    fn integrand_error_display() {
        let err = Error::Integrand {
            x: 0.25,
            reason: "domain error".into(),
        };
        assert_eq!(
            err.to_string(),
            "integrand evaluation failed at x = 0.25: domain error"
        );
    }
}
