#![allow(dead_code)]
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use tempfile::TempDir;
use tls_certpool::ssl::enums::certificate_source::CertificateSource;
use tls_certpool::ssl::structs::certificate_record::CertificateRecord;

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn temp_path(dir: &TempDir, file_name: &str) -> String {
    dir.path().join(file_name).to_string_lossy().to_string()
}

/// A fast ECDSA certificate with the given subject CN (skipped when empty) and DNS SANs.
pub fn create_test_record(common_name: &str, dns_names: &[&str]) -> CertificateRecord {
    let (cert_pem, key_pem) = create_test_pem(common_name, dns_names);
    let mut cert_reader = cert_pem.as_bytes();
    let cert = rustls_pemfile::certs(&mut cert_reader).next().unwrap().unwrap();
    let mut key_reader = key_pem.as_bytes();
    let key = rustls_pemfile::private_key(&mut key_reader).unwrap().unwrap();
    CertificateRecord::new(vec![cert], key, CertificateSource::Decoded).unwrap()
}

/// PEM certificate and PKCS#8 PEM key for a fast ECDSA certificate.
pub fn create_test_pem(common_name: &str, dns_names: &[&str]) -> (String, String) {
    let sans: Vec<String> = dns_names.iter().map(|name| name.to_string()).collect();
    let mut params = CertificateParams::new(sans).unwrap();
    params.distinguished_name = DistinguishedName::new();
    if !common_name.is_empty() {
        params.distinguished_name.push(DnType::CommonName, common_name);
    }
    let key_pair = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key_pair).unwrap();
    (cert.pem(), key_pair.serialize_pem())
}
