use crate::layout::ring_spans;
use crate::renderer::instance::{NucleonBuffer, NucleonInstance, NucleonKind};
use crate::session::NucleusSession;

/// Build the nucleon buffer from the session's current layout.
/// The first Z instances are protons; `proton_split` marks the boundary.
pub fn build_nucleon_buffer(session: &NucleusSession, buffer: &mut NucleonBuffer) {
    buffer.clear();

    let positions = session.positions();
    let split = session.protons() as usize;

    for span in ring_spans(positions.len(), session.config().ring_base_radius) {
        for (idx, pos) in positions
            .iter()
            .enumerate()
            .skip(span.start)
            .take(span.count)
        {
            let kind = if idx < split {
                NucleonKind::Proton
            } else {
                NucleonKind::Neutron
            };
            buffer.push(NucleonInstance {
                x: pos.x,
                y: pos.y,
                kind: kind.code(),
                ring: span.ring as f32,
            });
        }
    }

    buffer.set_proton_split(split as u32);
}
