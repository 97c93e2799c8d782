use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::generated_key_pair::GeneratedKeyPair;
use std::fs;

impl std::fmt::Debug for GeneratedKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedKeyPair")
            .field("certificate_len", &self.certificate_der.len())
            .finish_non_exhaustive()
    }
}

impl GeneratedKeyPair {
    pub fn write_to_files(&self, key_path: &str, cert_path: &str) -> Result<(), CertificateError> {
        fs::write(key_path, self.private_key_pem.as_bytes())
            .map_err(|e| CertificateError::FileWriteError(format!("{}: {}", key_path, e)))?;
        fs::write(cert_path, self.certificate_pem.as_bytes())
            .map_err(|e| CertificateError::FileWriteError(format!("{}: {}", cert_path, e)))?;
        Ok(())
    }
}
