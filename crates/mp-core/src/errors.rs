//! Error types for montepath.
//!
//! Every failure in the workspace is reported through a single
//! `thiserror`-derived enum. Parameter problems (a missing strike, a zero
//! sample window, a non-positive spot) are `InvalidArgument`; mathematical
//! preconditions violated at evaluation time (a geometric mean over
//! non-positive values) are `Domain`. Pricing operations either return a
//! finished estimate or one of these errors; partial results and silent NaN
//! propagation are not part of the contract.

use thiserror::Error;

/// The top-level error type used throughout montepath.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A required parameter is missing or inconsistent with the requested
    /// operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A mathematical precondition was violated at evaluation time.
    #[error("domain error: {0}")]
    Domain(String),
}

/// Shorthand `Result` type used throughout montepath.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a parameter precondition.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mp_core::ensure;
/// fn positive(x: f64) -> mp_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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

/// Check a mathematical precondition.
///
/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mp_core::domain;
/// fn log_of(x: f64) -> mp_core::errors::Result<f64> {
///     domain!(x > 0.0, "logarithm requires a positive value, got {x}");
///     Ok(x.ln())
/// }
/// assert!(log_of(1.0).is_ok());
/// assert!(log_of(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! domain {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail immediately with an `InvalidArgument` error.
///
/// # Example
/// ```
/// use mp_core::fail;
/// fn always_err() -> mp_core::errors::Result<()> {
///     fail!("unsupported variant");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn needs_strike(strike: Option<f64>) -> Result<f64> {
        match strike {
            Some(k) => Ok(k),
            None => Err(Error::InvalidArgument("strike is required".into())),
        }
    }

    #[test]
    fn invalid_argument_message() {
        let err = needs_strike(None).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: strike is required");
    }

    #[test]
    fn domain_and_invalid_argument_are_distinct() {
        let a = Error::InvalidArgument("x".into());
        let b = Error::Domain("x".into());
        assert_ne!(a, b);
    }
}
