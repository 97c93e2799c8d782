use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_source::CertificateSource;
use crate::ssl::enums::registration_order::RegistrationOrder;
use crate::ssl::structs::certificate_pool::CertificatePool;
use crate::ssl::structs::certificate_record::CertificateRecord;
use rustls::pki_types::CertificateDer;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

pub fn create_certificate_pool(registration_order: RegistrationOrder) -> Arc<CertificatePool> {
    Arc::new(CertificatePool::new(registration_order))
}

pub fn create_server_config_with_pool(pool: Arc<CertificatePool>) -> rustls::ServerConfig {
    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_cert_resolver(pool)
}

/// Reads a PEM certificate chain and a PEM private key (PKCS#1, PKCS#8 or SEC1).
pub fn load_key_pair_from_files(
    key_path: &str,
    cert_path: &str,
) -> Result<CertificateRecord, CertificateError> {
    let key_file = File::open(key_path)
        .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
    let mut key_reader = BufReader::new(key_file);
    let certs_file = File::open(cert_path)
        .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
    let mut certs_reader = BufReader::new(certs_file);
    let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut certs_reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
    if tls_certs.is_empty() {
        return Err(CertificateError::CertParseError(
            "No certificates found in file".to_string(),
        ));
    }
    let tls_key = rustls_pemfile::private_key(&mut key_reader)
        .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
        .ok_or(CertificateError::NoKeyFound)?;
    CertificateRecord::new(
        tls_certs,
        tls_key,
        CertificateSource::Files {
            key_path: key_path.to_string(),
            cert_path: cert_path.to_string(),
        },
    )
}
