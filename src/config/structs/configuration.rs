use serde::{Deserialize, Serialize};
use crate::config::enums::certificate_source_config::CertificateSourceConfig;
use crate::ssl::enums::registration_order::RegistrationOrder;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub registration_order: RegistrationOrder,
    #[serde(default)]
    pub certificates: Vec<CertificateSourceConfig>,
}
