use crate::ssl::enums::certificate_source::CertificateSource;

impl std::fmt::Display for CertificateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertificateSource::Generated => write!(f, "Generated"),
            CertificateSource::Decoded => write!(f, "Decoded"),
            CertificateSource::Files { key_path, cert_path } => {
                write!(f, "Files(key: {}, cert: {})", key_path, cert_path)
            }
        }
    }
}
