use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum RegistrationOrder {
    #[default]
    atomic,
    #[value(name = "append_first")]
    append_first,
}
