use crate::ssl::structs::subject_identity::SubjectIdentity;
use rcgen::{DistinguishedName, DnType};

pub const AUTO_TLS_COMMON_NAME: &str = "auto-tls";

impl SubjectIdentity {
    pub fn new(organization: &str, organizational_unit: &str, common_name: &str) -> Self {
        Self {
            organization: organization.to_string(),
            organizational_unit: organizational_unit.to_string(),
            common_name: common_name.to_string(),
        }
    }

    /// The identity used for auto-generated certificates. The common name is
    /// always `auto-tls`, so every auto-generated entry shares one index key.
    pub fn auto_tls(organization: &str, organizational_unit: &str) -> Self {
        Self::new(organization, organizational_unit, AUTO_TLS_COMMON_NAME)
    }

    pub fn distinguished_name(&self) -> DistinguishedName {
        let mut dn = DistinguishedName::new();
        if !self.organization.is_empty() {
            dn.push(DnType::OrganizationName, self.organization.as_str());
        }
        if !self.organizational_unit.is_empty() {
            dn.push(DnType::OrganizationalUnitName, self.organizational_unit.as_str());
        }
        if !self.common_name.is_empty() {
            dn.push(DnType::CommonName, self.common_name.as_str());
        }
        dn
    }
}
