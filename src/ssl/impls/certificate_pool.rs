use crate::config::enums::certificate_source_config::CertificateSourceConfig;
use crate::config::structs::configuration::Configuration;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_source::CertificateSource;
use crate::ssl::enums::registration_order::RegistrationOrder;
use crate::ssl::generator::{decode_key_pair, generate_key_pair};
use crate::ssl::ssl::load_key_pair_from_files;
use crate::ssl::structs::certificate_pool::CertificatePool;
use crate::ssl::structs::certificate_record::CertificateRecord;
use crate::ssl::structs::pool_configuration::PoolConfiguration;
use crate::ssl::structs::subject_identity::SubjectIdentity;
use log::{debug, info, warn};
use parking_lot::{RwLock, RwLockReadGuard};
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for CertificatePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let configuration = self.configuration.read();
        f.debug_struct("CertificatePool")
            .field("registration_order", &self.registration_order)
            .field("certificates_count", &configuration.certificates.len())
            .field("names_count", &configuration.name_to_certificate.len())
            .finish()
    }
}

impl Default for CertificatePool {
    fn default() -> Self {
        Self::new(RegistrationOrder::default())
    }
}

impl CertificatePool {
    pub fn new(registration_order: RegistrationOrder) -> Self {
        Self {
            configuration: RwLock::new(PoolConfiguration::default()),
            registration_order,
        }
    }

    /// Builds a pool and registers every configured certificate in file order.
    pub fn from_configuration(config: &Configuration) -> Result<Arc<Self>, CertificateError> {
        let pool = Arc::new(Self::new(config.registration_order));
        for entry in &config.certificates {
            match entry {
                CertificateSourceConfig::auto { organization, unit } => {
                    pool.register_auto_generated(organization, unit)?;
                }
                CertificateSourceConfig::files { key_file, cert_file } => {
                    pool.register_from_files(key_file, cert_file)?;
                }
            }
        }
        Ok(pool)
    }

    pub fn registration_order(&self) -> RegistrationOrder {
        self.registration_order
    }

    /// Adds a record to the flat list and indexes it by common name and DNS SANs.
    ///
    /// With `RegistrationOrder::atomic` the leaf is parsed before anything is
    /// stored, so a parse failure leaves the pool untouched. With
    /// `RegistrationOrder::append_first` the record is appended first and stays
    /// in the list (without index entries) when parsing fails.
    pub fn register(&self, record: CertificateRecord) -> Result<Arc<CertificateRecord>, CertificateError> {
        let record = Arc::new(record);
        let (position, indexed) = match self.registration_order {
            RegistrationOrder::atomic => {
                let names = record.parse_names()?;
                let mut configuration = self.configuration.write();
                configuration.certificates.push(Arc::clone(&record));
                let indexed = configuration.index(&names, &record);
                (configuration.certificates.len(), indexed)
            }
            RegistrationOrder::append_first => {
                let mut configuration = self.configuration.write();
                configuration.certificates.push(Arc::clone(&record));
                let names = match record.parse_names() {
                    Ok(names) => names,
                    Err(error) => {
                        warn!(
                            "[CERTPOOL] Certificate #{} ({}) stays in the list without index entries: {}",
                            configuration.certificates.len(),
                            record.source,
                            error
                        );
                        return Err(error);
                    }
                };
                let indexed = configuration.index(&names, &record);
                (configuration.certificates.len(), indexed)
            }
        };
        info!(
            "[CERTPOOL] Registered certificate #{} ({}) under {} name(s)",
            position, record.source, indexed
        );
        Ok(record)
    }

    /// Generates a self-signed `auto-tls` certificate for the organization and
    /// unit, then registers it.
    pub fn register_auto_generated(
        &self,
        organization: &str,
        unit: &str,
    ) -> Result<Arc<CertificateRecord>, CertificateError> {
        let subject = SubjectIdentity::auto_tls(organization, unit);
        let generated = generate_key_pair(&subject, &[])?;
        let mut record = decode_key_pair(&generated.certificate_pem, &generated.private_key_pem)?;
        record.source = CertificateSource::Generated;
        self.register(record)
    }

    /// Loads a PEM key/cert pair from disk and registers it. Every failure is
    /// wrapped in `CertificateError::FileLoadError` carrying both paths.
    pub fn register_from_files(
        &self,
        key_file: &str,
        cert_file: &str,
    ) -> Result<Arc<CertificateRecord>, CertificateError> {
        let record = load_key_pair_from_files(key_file, cert_file)
            .map_err(|e| CertificateError::file_load(key_file, cert_file, e))?;
        self.register(record)
            .map_err(|e| CertificateError::file_load(key_file, cert_file, e))
    }

    /// Shared read access to the flat list and the hostname index.
    ///
    /// Registration blocks while a guard is held, so keep it short-lived.
    pub fn configuration(&self) -> RwLockReadGuard<'_, PoolConfiguration> {
        self.configuration.read()
    }

    pub fn resolve_server_name(&self, server_name: Option<&str>) -> Option<Arc<CertificateRecord>> {
        let resolved = self.configuration.read().resolve(server_name);
        match &resolved {
            Some(record) => debug!("[CERTPOOL] Resolved {:?} to {}", server_name, record.source),
            None => warn!("[CERTPOOL] No certificate available for {:?}", server_name),
        }
        resolved
    }

    pub fn get_certificate(&self, name: &str) -> Option<Arc<CertificateRecord>> {
        self.configuration.read().get(name)
    }

    pub fn get_all_certificates(&self) -> Vec<Arc<CertificateRecord>> {
        self.configuration.read().certificates.clone()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .configuration
            .read()
            .name_to_certificate
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.configuration.read().certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configuration.read().certificates.is_empty()
    }
}

impl ResolvesServerCert for CertificatePool {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.resolve_server_name(client_hello.server_name())
            .map(|record| Arc::clone(&record.certified_key))
    }
}
