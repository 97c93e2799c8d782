use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "source")]
pub enum CertificateSourceConfig {
    auto {
        organization: String,
        unit: String,
    },
    files {
        key_file: String,
        cert_file: String,
    },
}
