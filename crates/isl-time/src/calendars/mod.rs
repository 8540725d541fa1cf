//! Country-specific calendar implementations.

/// Iceland.
pub mod iceland;
