use crate::ssl::enums::registration_order::RegistrationOrder;
use crate::ssl::structs::pool_configuration::PoolConfiguration;
use parking_lot::RwLock;

pub struct CertificatePool {
    pub(crate) configuration: RwLock<PoolConfiguration>,
    pub(crate) registration_order: RegistrationOrder,
}
