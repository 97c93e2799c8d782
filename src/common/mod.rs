//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Log level parsing
//! - Logging setup (fern, colored levels, local timestamps)
//!
//! # Data Structures
//!
//! - `CustomError` - Message-only error used by the binary and config loading

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
