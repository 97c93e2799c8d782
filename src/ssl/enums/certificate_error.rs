use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Failed to generate certificate: {0}")]
    GenerationError(String),
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Failed to write file: {0}")]
    FileWriteError(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in file")]
    NoKeyFound,
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Failed to load key pair (key: {key_path}, cert: {cert_path}): {source}")]
    FileLoadError {
        key_path: String,
        cert_path: String,
        #[source]
        source: Box<CertificateError>,
    },
}
