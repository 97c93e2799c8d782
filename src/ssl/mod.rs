//! TLS certificate pool module.
//!
//! This module owns the server identities a TLS listener can present. It
//! generates self-signed certificates on demand, loads certificate/key pairs
//! from PEM files, and indexes every registered certificate by its common
//! name and DNS subject alternative names so the listener can pick one per
//! connection from the SNI hostname.
//!
//! # Features
//!
//! - Self-signed RSA-2048 certificate generation (10 year validity)
//! - PEM `CERTIFICATE` / `RSA PRIVATE KEY` output
//! - Loading PEM cert/key pairs from disk
//! - Hostname index with last-write-wins semantics
//! - SNI resolution with wildcard and first-certificate fallback
//! - Thread-safe registration and lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use tls_certpool::ssl::enums::registration_order::RegistrationOrder;
//! use tls_certpool::ssl::ssl::{create_certificate_pool, create_server_config_with_pool};
//!
//! let pool = create_certificate_pool(RegistrationOrder::atomic);
//! pool.register_auto_generated("Acme", "IoT")?;
//! pool.register_from_files("key.pem", "cert.pem")?;
//!
//! let server_config = create_server_config_with_pool(pool.clone());
//! ```

/// Certificate enumerations (errors, record sources, registration order).
pub mod enums;

/// Certificate data structures.
pub mod structs;

/// Implementation blocks for certificate structures.
pub mod impls;

/// Self-signed certificate generation and PEM key pair decoding.
pub mod generator;

/// Pool construction, file loading and rustls integration helpers.
#[allow(clippy::module_inception)]
pub mod ssl;
