pub mod config;

pub use config::{CountRange, LabConfig, NEUTRON_LIMIT, PROTON_LIMIT};
