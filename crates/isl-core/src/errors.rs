//! Error types for the icelandic-holidays crates.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The `ensure!` and
//! `fail!` macros are shorthands for the two string-carrying variants.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year outside the domain of the Gregorian Easter computus.
    ///
    /// Raised by `easter_sunday` and propagated unchanged through every
    /// holiday rule and classification that depends on it.
    #[error("year {year} is out of domain: Easter is only defined for years >= {min}")]
    Domain {
        /// The rejected year.
        year: u16,
        /// The smallest accepted year.
        min: u16,
    },

    /// Date construction or arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Return `true` for [`Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain { .. })
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use isl_core::{ensure, errors::Error};
/// fn month(m: u8) -> isl_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert!(matches!(month(13), Err(Error::Precondition(_))));
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

/// Return `Err(Error::Date(...))` immediately.
///
/// # Example
/// ```
/// use isl_core::{fail, errors::Error};
/// fn out_of_range(year: u16) -> isl_core::errors::Result<()> {
///     fail!("year {year} out of range");
/// }
/// assert_eq!(
///     out_of_range(10_000),
///     Err(Error::Date("year 10000 out of range".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Date(format!($($msg)*)))
    };
}
