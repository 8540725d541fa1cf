//! # isl-core
//!
//! Error definitions shared by the icelandic-holidays crates.
//!
//! The holiday engine has exactly one failure mode of its own, an Easter
//! computation requested for a year before the Gregorian reform took hold.
//! It is modelled as [`Error::Domain`] so callers can tell it apart from
//! plain date-construction failures.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
