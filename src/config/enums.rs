//! Configuration enumerations.

/// A `[[certificates]]` entry: auto-generated or loaded from files.
pub mod certificate_source_config;

/// Errors raised while loading, saving or validating the configuration.
pub mod configuration_error;
