use crate::ssl::enums::certificate_error::CertificateError;

impl CertificateError {
    pub fn file_load(key_path: &str, cert_path: &str, source: CertificateError) -> Self {
        CertificateError::FileLoadError {
            key_path: key_path.to_string(),
            cert_path: cert_path.to_string(),
            source: Box::new(source),
        }
    }
}

impl From<rcgen::Error> for CertificateError {
    fn from(error: rcgen::Error) -> Self {
        CertificateError::GenerationError(error.to_string())
    }
}

impl From<rsa::Error> for CertificateError {
    fn from(error: rsa::Error) -> Self {
        CertificateError::GenerationError(error.to_string())
    }
}
