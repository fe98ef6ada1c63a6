//! Property-based tests for the ring-packing layout.
//!
//! Covers: output length, determinism, ring radii and the ring-major order
//! the proton/neutron split depends on.

use nucleus_core::layout::{layout, ring_capacity, ring_radius, ring_spans, RING_SPACING};
use proptest::prelude::*;

// ── Length and determinism ───────────────────────────────────────────

proptest! {
    /// Exactly `total` positions come back.
    #[test]
    fn layout_length_matches_total(total in 0usize..500, base in 1.0f32..100.0) {
        prop_assert_eq!(layout(total, base).len(), total);
    }

    /// Repeated calls give identical sequences.
    #[test]
    fn layout_is_deterministic(total in 0usize..200, base in 1.0f32..100.0) {
        prop_assert_eq!(layout(total, base), layout(total, base));
    }

    /// A larger layout starts with the smaller one, except for the last
    /// (possibly partial) ring of the smaller, which gets respaced.
    #[test]
    fn full_rings_are_prefix_stable(total in 1usize..200, extra in 1usize..50) {
        let small = ring_spans(total, 36.0);
        let last = small.last().unwrap();
        let stable = if last.count == ring_capacity(last.ring) {
            total
        } else {
            last.start
        };
        let a = layout(total, 36.0);
        let b = layout(total + extra, 36.0);
        prop_assert_eq!(&a[..stable], &b[..stable]);
    }
}

// ── Ring structure ───────────────────────────────────────────────────

proptest! {
    /// Spans tile the index range, never exceed capacity, and only the
    /// outermost ring may be partial.
    #[test]
    fn spans_tile_the_layout(total in 1usize..500) {
        let spans = ring_spans(total, 36.0);
        let mut next = 0;
        for (k, span) in spans.iter().enumerate() {
            prop_assert_eq!(span.ring as usize, k);
            prop_assert_eq!(span.start, next);
            prop_assert!(span.count >= 1 && span.count <= ring_capacity(span.ring));
            if k + 1 < spans.len() {
                prop_assert_eq!(span.count, ring_capacity(span.ring));
            }
            next += span.count;
        }
        prop_assert_eq!(next, total);
    }

    /// Ring count grows like the square root of the total.
    #[test]
    fn ring_count_is_sublinear(total in 1usize..2000) {
        let rings = ring_spans(total, 36.0).len();
        // 1 + 3k(k-1) nucleons fill k rings.
        let bound = ((total as f64) / 3.0).sqrt().ceil() as usize + 2;
        prop_assert!(rings <= bound, "rings={} bound={}", rings, bound);
    }

    /// Every position sits on its ring's radius.
    #[test]
    fn positions_lie_on_their_ring(total in 1usize..300, base in 1.0f32..80.0) {
        let positions = layout(total, base);
        for span in ring_spans(total, base) {
            let expected = ring_radius(span.ring, base);
            prop_assert!((span.radius - expected).abs() < 1e-6);
            if span.ring > 0 {
                prop_assert!((expected - base * span.ring as f32 * RING_SPACING).abs() < 1e-4);
            }
            for p in &positions[span.start..span.start + span.count] {
                prop_assert!((p.length() - expected).abs() < 1e-3 * expected.max(1.0));
            }
        }
    }
}

#[test]
fn seven_nucleons_use_two_radii() {
    let base = 36.0;
    let positions = layout(7, base);
    let mut radii: Vec<f32> = positions.iter().map(|p| p.length()).collect();
    radii.sort_by(|a, b| a.total_cmp(b));
    radii.dedup_by(|a, b| (*a - *b).abs() < 1e-4);
    assert_eq!(radii.len(), 2);
    assert_eq!(radii[0], 0.0);
    assert!((radii[1] - base * 0.65).abs() < 1e-4);

    for (i, p) in positions[1..].iter().enumerate() {
        let expected = (i as f32 * 60.0).to_radians();
        assert!((p.x - radii[1] * expected.cos()).abs() < 1e-3);
        assert!((p.y - radii[1] * expected.sin()).abs() < 1e-3);
    }
}
