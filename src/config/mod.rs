//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the certificate pool
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **registration_order**: `atomic` or `append_first`
//! - **certificates**: an ordered list of certificate sources, each either
//!   `auto` (organization + unit) or `files` (key file + cert file)
//!
//! # Example
//!
//! ```rust,ignore
//! use tls_certpool::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations (certificate sources, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
