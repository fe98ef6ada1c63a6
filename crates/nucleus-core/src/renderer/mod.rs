pub mod instance;
pub mod snapshot;

pub use instance::{NucleonBuffer, NucleonInstance, NucleonKind};
pub use snapshot::LabSnapshot;
