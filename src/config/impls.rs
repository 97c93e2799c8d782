//! Implementation blocks for configuration types.

/// Configuration implementation: defaults, loading, saving and validation.
pub mod configuration;

/// ConfigurationError implementation: Display and Error.
pub mod configuration_error;
