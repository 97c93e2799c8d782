//! Implementation blocks for common types.

/// CustomError implementation: constructor, Display and Error.
pub mod custom_error;
