#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum CertificateSource {
    Generated,
    Decoded,
    Files {
        key_path: String,
        cert_path: String,
    },
}
