pub mod render;

pub use render::build_nucleon_buffer;
