use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::certificate_source_config::CertificateSourceConfig;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::ssl::enums::registration_order::RegistrationOrder;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            registration_order: RegistrationOrder::atomic,
            certificates: vec![
                CertificateSourceConfig::auto {
                    organization: String::from("tls-certpool"),
                    unit: String::from("auto"),
                }
            ],
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(&self.log_level)?;
        for (position, entry) in self.certificates.iter().enumerate() {
            if let CertificateSourceConfig::files { key_file, cert_file } = entry {
                if key_file.is_empty() || cert_file.is_empty() {
                    return Err(ConfigurationError::ValidationError(format!(
                        "certificate entry #{} needs both key_file and cert_file",
                        position + 1
                    )));
                }
            }
        }
        Ok(())
    }
}
