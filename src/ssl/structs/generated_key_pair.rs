use rustls::pki_types::{CertificateDer, PrivatePkcs1KeyDer};

pub struct GeneratedKeyPair {
    pub certificate_pem: String,
    pub private_key_pem: String,
    pub certificate_der: CertificateDer<'static>,
    pub private_key_der: PrivatePkcs1KeyDer<'static>,
}
