//! Error types for latticelib.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! produce. The `ensure!` and `fail!` macros provide short-hands for
//! precondition checks and unconditional failures.

use thiserror::Error;

/// The top-level error type used throughout latticelib.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A formula was evaluated outside its mathematical domain.
    ///
    /// Raised instead of letting a division by zero propagate as NaN —
    /// a loud failure is preferable to a silently garbage option value.
    #[error("domain error: {0}")]
    Domain(String),
}

/// Shorthand `Result` type used throughout latticelib.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lp_core::{ensure, errors::Error};
/// fn positive(x: f64) -> lp_core::errors::Result<f64> {
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
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use lp_core::{fail, errors::Error};
/// fn always_err() -> lp_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
