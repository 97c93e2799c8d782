use crate::ssl::structs::certificate_names::CertificateNames;
use crate::ssl::structs::certificate_record::CertificateRecord;
use crate::ssl::structs::pool_configuration::PoolConfiguration;
use log::debug;
use std::sync::Arc;

impl std::fmt::Debug for PoolConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolConfiguration")
            .field("certificates_count", &self.certificates.len())
            .field("names", &self.name_to_certificate.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PoolConfiguration {
    /// Adds index entries for the common name (when non-empty) and every DNS
    /// SAN. An existing entry under the same name is replaced.
    pub fn index(&mut self, names: &CertificateNames, record: &Arc<CertificateRecord>) -> usize {
        let mut indexed = 0;
        if !names.common_name.is_empty() {
            self.insert_name(&names.common_name, record);
            indexed += 1;
        }
        for dns_name in &names.dns_names {
            self.insert_name(dns_name, record);
            indexed += 1;
        }
        indexed
    }

    fn insert_name(&mut self, name: &str, record: &Arc<CertificateRecord>) {
        if self
            .name_to_certificate
            .insert(name.to_string(), Arc::clone(record))
            .is_some()
        {
            debug!("[CERTPOOL] Replaced index entry for '{}'", name);
        } else {
            debug!("[CERTPOOL] Indexed '{}'", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<CertificateRecord>> {
        self.name_to_certificate.get(name).cloned()
    }

    /// Picks the certificate for a requested server name: exact match, then a
    /// wildcard match on the first label, then the first registered certificate.
    pub fn resolve(&self, server_name: Option<&str>) -> Option<Arc<CertificateRecord>> {
        if let Some(server_name) = server_name {
            let name = server_name.to_lowercase();
            if let Some(record) = self.name_to_certificate.get(&name) {
                return Some(Arc::clone(record));
            }
            if let Some(wildcard) = wildcard_name(&name)
                && let Some(record) = self.name_to_certificate.get(&wildcard)
            {
                return Some(Arc::clone(record));
            }
        }
        self.certificates.first().cloned()
    }
}

fn wildcard_name(name: &str) -> Option<String> {
    let (_, parent) = name.split_once('.')?;
    if parent.is_empty() {
        return None;
    }
    Some(format!("*.{}", parent))
}
