use crate::ssl::structs::certificate_record::CertificateRecord;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct PoolConfiguration {
    pub certificates: Vec<Arc<CertificateRecord>>,
    pub name_to_certificate: HashMap<String, Arc<CertificateRecord>>,
}
