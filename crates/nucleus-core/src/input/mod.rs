pub mod event;

pub use event::{events, CountInput, LabInput};
