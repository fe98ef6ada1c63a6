pub mod rings;

pub use rings::{
    layout, layout_signed, layout_extent, ring_capacity, ring_count, ring_radius,
    ring_spans, RingSpan, RING_SPACING,
};
