use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_source::CertificateSource;
use crate::ssl::structs::certificate_names::CertificateNames;
use crate::ssl::structs::certificate_record::CertificateRecord;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use x509_parser::extensions::GeneralName;
use x509_parser::parse_x509_certificate;

impl std::fmt::Debug for CertificateRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateRecord")
            .field("certs_count", &self.certs.len())
            .field("source", &self.source)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl CertificateRecord {
    pub fn new(
        certs: Vec<CertificateDer<'static>>,
        key: PrivateKeyDer<'static>,
        source: CertificateSource,
    ) -> Result<Self, CertificateError> {
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
        Ok(Self {
            certified_key: Arc::new(CertifiedKey::new(certs.clone(), signing_key)),
            certs,
            key,
            source,
            created_at: chrono::Utc::now(),
        })
    }

    pub fn leaf(&self) -> Option<&CertificateDer<'static>> {
        self.certs.first()
    }

    /// Parses the leaf certificate and returns the names it should be indexed under.
    pub fn parse_names(&self) -> Result<CertificateNames, CertificateError> {
        let leaf = self
            .leaf()
            .ok_or_else(|| CertificateError::CertParseError("Certificate chain is empty".to_string()))?;
        let (_, x509) = parse_x509_certificate(leaf.as_ref())
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;

        // A repeated CN attribute resolves to the last one.
        let common_name = x509
            .subject()
            .iter_common_name()
            .filter_map(|cn| cn.as_str().ok())
            .last()
            .unwrap_or_default()
            .to_string();

        let mut dns_names = Vec::new();
        let san = x509
            .subject_alternative_name()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if let Some(san) = san {
            for name in &san.value.general_names {
                if let GeneralName::DNSName(dns) = name {
                    dns_names.push(dns.to_string());
                }
            }
        }

        Ok(CertificateNames {
            common_name,
            dns_names,
        })
    }
}
