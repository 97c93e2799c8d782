use std::net::IpAddr;
use clap::Parser;
use crate::ssl::enums::registration_order::RegistrationOrder;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Override the registration order of the config file.
    #[arg(long, value_enum)]
    pub registration_order: Option<RegistrationOrder>,

    /// Generate a self-signed key and certificate file, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "tls-certpool")]
    pub selfsigned_organization: String,
    #[arg(long, default_value = "auto")]
    pub selfsigned_unit: String,
    #[arg(long, default_value = "auto-tls")]
    pub selfsigned_common_name: String,
    /// IP address to embed as a subject alternative name (repeatable).
    #[arg(long = "selfsigned-ip")]
    pub selfsigned_ips: Vec<IpAddr>,
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,
}
