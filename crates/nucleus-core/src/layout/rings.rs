//! Ring-packing layout for nucleons.
//!
//! Places `total` nucleons on concentric rings around the origin: one at the
//! center, then `6k` on ring `k`. Output order is ring-major, then angular
//! order within the ring. Callers label the first Z entries as protons, so the
//! traversal order must stay exactly as it is.

use glam::Vec2;

/// Radius multiplier applied to `ring_base_radius * k` for ring `k >= 1`.
pub const RING_SPACING: f32 = 0.65;

/// One ring's share of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpan {
    /// Ring index (0 = center).
    pub ring: u32,
    /// Index of the first nucleon on this ring in the flat layout.
    pub start: usize,
    /// Nucleons placed on this ring.
    pub count: usize,
    /// Distance from the center.
    pub radius: f32,
}

/// Maximum nucleons ring `k` can hold.
pub fn ring_capacity(ring: u32) -> usize {
    if ring == 0 {
        1
    } else {
        ring as usize * 6
    }
}

/// Radius of ring `k`.
pub fn ring_radius(ring: u32, ring_base_radius: f32) -> f32 {
    if ring == 0 {
        0.0
    } else {
        ring_base_radius * ring as f32 * RING_SPACING
    }
}

/// Split `total` nucleons into ring spans, innermost first.
pub fn ring_spans(total: usize, ring_base_radius: f32) -> Vec<RingSpan> {
    let mut spans = Vec::new();
    let mut remaining = total;
    let mut start = 0;
    let mut ring = 0u32;

    while remaining > 0 {
        let count = remaining.min(ring_capacity(ring));
        spans.push(RingSpan {
            ring,
            start,
            count,
            radius: ring_radius(ring, ring_base_radius),
        });
        start += count;
        remaining -= count;
        ring += 1;
    }

    spans
}

/// Number of rings used by a layout of `total` nucleons.
pub fn ring_count(total: usize) -> u32 {
    ring_spans(total, 1.0).len() as u32
}

/// Radius of the outermost occupied ring (0 for empty or single-nucleon layouts).
pub fn layout_extent(total: usize, ring_base_radius: f32) -> f32 {
    ring_spans(total, ring_base_radius)
        .last()
        .map(|span| span.radius)
        .unwrap_or(0.0)
}

/// Positions for `total` nucleons. Same inputs always give the same output.
pub fn layout(total: usize, ring_base_radius: f32) -> Vec<Vec2> {
    let mut positions = Vec::with_capacity(total);

    for span in ring_spans(total, ring_base_radius) {
        for i in 0..span.count {
            let angle = (i as f32 / span.count as f32) * std::f32::consts::TAU;
            positions.push(Vec2::new(
                span.radius * angle.cos(),
                span.radius * angle.sin(),
            ));
        }
    }

    positions
}

/// Like [`layout`] but accepts any signed count; non-positive totals give an
/// empty layout.
pub fn layout_signed(total: i64, ring_base_radius: f32) -> Vec<Vec2> {
    if total <= 0 {
        return Vec::new();
    }
    layout(total as usize, ring_base_radius)
}
