pub mod api;
pub mod bridge;
pub mod elements;
pub mod error;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod rng;
pub mod session;
pub mod systems;
pub mod text;

// Re-export key types at crate root for convenience
pub use api::config::{CountRange, LabConfig};
pub use bridge::protocol::ProtocolLayout;
pub use elements::{Element, ElementIdentity};
pub use error::{LabError, LabResult};
pub use input::{CountInput, LabInput};
pub use layout::{layout, layout_signed, ring_spans, RingSpan};
pub use renderer::{LabSnapshot, NucleonBuffer, NucleonInstance, NucleonKind};
pub use rng::Rng;
pub use session::notation::IsotopeNotation;
pub use session::quiz::{QuizMode, QuizState, Verdict};
pub use session::stability::StabilityHint;
pub use session::NucleusSession;
pub use systems::render::build_nucleon_buffer;
pub use text::Locale;
