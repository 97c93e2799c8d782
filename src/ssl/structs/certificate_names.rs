#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateNames {
    pub common_name: String,
    pub dns_names: Vec<String>,
}
