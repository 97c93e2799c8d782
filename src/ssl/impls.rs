//! Implementation blocks for certificate data structures.

/// CertificateError conversions and the file-load wrapper.
pub mod certificate_error;

/// CertificateSource implementation: Display.
pub mod certificate_source;

/// SubjectIdentity implementation: auto-tls identity and X.509 subject building.
pub mod subject_identity;

/// GeneratedKeyPair implementation: Debug and writing to disk.
pub mod generated_key_pair;

/// CertificateRecord implementation: signing key setup and name parsing.
pub mod certificate_record;

/// PoolConfiguration implementation: hostname indexing and resolution.
pub mod pool_configuration;

/// CertificatePool implementation: registration, lookup and rustls resolver.
pub mod certificate_pool;
