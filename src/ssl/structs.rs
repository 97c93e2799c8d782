//! Certificate data structures.

/// Subject fields used to build a self-signed certificate.
pub mod subject_identity;

/// PEM-encoded output of the certificate generator.
pub mod generated_key_pair;

/// A registered certificate chain with its signing key.
pub mod certificate_record;

/// Names parsed out of a leaf certificate (common name, DNS SANs).
pub mod certificate_names;

/// The flat certificate list and hostname index handed to the TLS listener.
pub mod pool_configuration;

/// The thread-safe certificate pool.
pub mod certificate_pool;
