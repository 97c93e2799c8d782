use crate::ssl::enums::certificate_source::CertificateSource;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct CertificateRecord {
    pub certs: Vec<CertificateDer<'static>>,
    pub key: PrivateKeyDer<'static>,
    pub certified_key: Arc<CertifiedKey>,
    pub source: CertificateSource,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
