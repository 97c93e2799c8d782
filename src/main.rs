use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tls_certpool::common::common::setup_logging;
use tls_certpool::config::structs::configuration::Configuration;
use tls_certpool::ssl::enums::certificate_error::CertificateError;
use tls_certpool::ssl::generator::generate_key_pair;
use tls_certpool::ssl::ssl::create_server_config_with_pool;
use tls_certpool::ssl::structs::certificate_pool::CertificatePool;
use tls_certpool::ssl::structs::subject_identity::SubjectIdentity;
use tls_certpool::structs::Cli;

fn main()
{
    let args = Cli::parse();

    if args.create_selfsigned {
        if let Err(error) = setup_logging(&Configuration::init()) {
            eprintln!("[ERROR] {}", error);
            exit(101);
        }
        match cert_gen(&args) {
            Ok(_) => exit(0),
            Err(error) => {
                error!("[CERTGEN] {}", error);
                exit(1);
            }
        }
    }

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(registration_order) = args.registration_order {
        config.registration_order = registration_order;
    }
    if let Err(error) = config.validate() {
        eprintln!("[ERROR] {}", error);
        exit(101);
    }
    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {}", error);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let pool = match CertificatePool::from_configuration(&config) {
        Ok(pool) => pool,
        Err(error) => {
            error!("[CERTPOOL] Unable to populate the certificate pool: {}", error);
            exit(1);
        }
    };

    let _server_config = Arc::new(create_server_config_with_pool(pool.clone()));
    info!("[CERTPOOL] TLS server configuration ready ({:?} registration)", pool.registration_order());

    for (position, record) in pool.get_all_certificates().iter().enumerate() {
        info!("[CERTPOOL] #{} {} (registered {})", position + 1, record.source, record.created_at);
    }
    for name in pool.names() {
        if let Some(record) = pool.get_certificate(&name) {
            info!("[CERTPOOL] '{}' -> {}", name, record.source);
        }
    }
}

fn cert_gen(args: &Cli) -> Result<(), CertificateError>
{
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let subject = SubjectIdentity::new(
        &args.selfsigned_organization,
        &args.selfsigned_unit,
        &args.selfsigned_common_name,
    );
    let generated = generate_key_pair(&subject, &args.selfsigned_ips)?;
    generated.write_to_files(&args.selfsigned_keyfile, &args.selfsigned_certfile)?;

    info!("[CERTGEN] The files {} and {} have been generated, use them only for development reasons", args.selfsigned_keyfile, args.selfsigned_certfile);
    Ok(())
}
