//! # tls-certpool
//!
//! A pool of TLS server identities for a TLS-terminating server.
//!
//! ## Overview
//!
//! The pool holds every certificate a listener can present. Certificates are
//! either generated on the spot (self-signed RSA-2048, valid for ten years)
//! or loaded from PEM key/cert files. Each registered certificate is indexed
//! by its subject common name and its DNS subject alternative names, and the
//! pool plugs into `rustls` as a certificate resolver that picks a
//! certificate from the SNI hostname of each incoming connection.
//!
//! ## Features
//!
//! - **Self-signed generation**: random 128-bit serial, server-auth only,
//!   optional IP address SANs, PEM output
//! - **File loading**: PEM certificate chains with PKCS#1, PKCS#8 or SEC1 keys
//! - **Hostname index**: last registration wins for a given name
//! - **SNI resolution**: exact, wildcard, then first-certificate fallback
//! - **Thread safety**: registration and lookup guarded by a `RwLock`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tls_certpool::ssl::enums::registration_order::RegistrationOrder;
//! use tls_certpool::ssl::ssl::{create_certificate_pool, create_server_config_with_pool};
//!
//! let pool = create_certificate_pool(RegistrationOrder::atomic);
//! pool.register_auto_generated("Acme", "IoT")?;
//! let server_config = create_server_config_with_pool(pool);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error types
//! - [`config`] - Configuration management and TOML parsing
//! - [`ssl`] - Certificate generation, loading and the certificate pool
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the logging setup used by the binary and the `CustomError` type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Certificate pool module.
///
/// Provides self-signed certificate generation, PEM key pair decoding and
/// file loading, and the hostname-indexed certificate pool used for SNI-based
/// certificate selection.
pub mod ssl;

/// CLI argument parsing.
///
/// Defines the command-line interface of the `tls-certpool` binary.
pub mod structs;
