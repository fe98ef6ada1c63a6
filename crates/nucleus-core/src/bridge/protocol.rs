/// Shared frame buffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Nucleons: max_nucleons × 4 floats]
/// ```
///
/// The header is rewritten after every applied event. TypeScript reads
/// `max_nucleons` from the header to size its views.

use crate::api::config::LabConfig;
use crate::renderer::instance::NucleonBuffer;
use crate::session::NucleusSession;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_REVISION: usize = 1;
pub const HEADER_MAX_NUCLEONS: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_PROTON_SPLIT: usize = 4;
pub const HEADER_PROTONS: usize = 5;
pub const HEADER_NEUTRONS: usize = 6;
pub const HEADER_MASS_NUMBER: usize = 7;
pub const HEADER_QUIZ_MODE: usize = 8;
pub const HEADER_VERDICT: usize = 9;
pub const HEADER_STABILITY: usize = 10;
pub const HEADER_RING_COUNT: usize = 11;
pub const HEADER_LAYOUT_EXTENT: usize = 12;
pub const HEADER_NUCLEON_RADIUS: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per nucleon instance: x, y, kind, ring (wire format — never changes).
pub const NUCLEON_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum nucleons (largest Z + largest N).
    pub max_nucleons: usize,
    /// Size of nucleon data section in floats.
    pub nucleon_data_floats: usize,
    /// Offset (in floats) where nucleon data begins.
    pub nucleon_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_nucleons: usize) -> Self {
        let nucleon_data_floats = max_nucleons * NUCLEON_FLOATS;
        let nucleon_data_offset = HEADER_FLOATS;
        let buffer_total_floats = nucleon_data_offset + nucleon_data_floats;

        Self {
            max_nucleons,
            nucleon_data_floats,
            nucleon_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &LabConfig) -> Self {
        Self::new(config.max_nucleons())
    }

    /// Write header and nucleon data into `frame`, which must be
    /// `buffer_total_floats` long. Nucleons past `max_nucleons` are dropped.
    pub fn write_frame(&self, frame: &mut [f32], session: &NucleusSession, nucleons: &NucleonBuffer) {
        if frame.len() < self.buffer_total_floats {
            log::error!(
                "Frame buffer too small: {} < {} floats",
                frame.len(),
                self.buffer_total_floats
            );
            return;
        }

        let count = (nucleons.instance_count() as usize).min(self.max_nucleons);
        if count < nucleons.instance_count() as usize {
            log::warn!("Dropping {} nucleons over capacity", nucleons.instance_count() as usize - count);
        }

        let header = &mut frame[..HEADER_FLOATS];
        header.fill(0.0);
        header[HEADER_REVISION] = session.revision() as f32;
        header[HEADER_MAX_NUCLEONS] = self.max_nucleons as f32;
        header[HEADER_INSTANCE_COUNT] = count as f32;
        header[HEADER_PROTON_SPLIT] = nucleons.proton_split.min(count as u32) as f32;
        header[HEADER_PROTONS] = session.protons() as f32;
        header[HEADER_NEUTRONS] = session.neutrons() as f32;
        header[HEADER_MASS_NUMBER] = session.mass_number() as f32;
        header[HEADER_QUIZ_MODE] = session.quiz_mode().code() as f32;
        header[HEADER_VERDICT] = session.verdict().code() as f32;
        header[HEADER_STABILITY] = session.stability_hint().code() as f32;
        header[HEADER_RING_COUNT] = session.ring_count() as f32;
        header[HEADER_LAYOUT_EXTENT] = session.layout_extent();
        header[HEADER_NUCLEON_RADIUS] = session.config().nucleon_radius;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;

        let floats = &nucleons.as_floats()[..count * NUCLEON_FLOATS];
        let start = self.nucleon_data_offset;
        frame[start..start + floats.len()].copy_from_slice(floats);
        frame[start + floats.len()..self.buffer_total_floats].fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::render::build_nucleon_buffer;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&LabConfig::default());
        assert_eq!(layout.max_nucleons, 60);
        assert_eq!(layout.nucleon_data_offset, HEADER_FLOATS);
        assert_eq!(layout.nucleon_data_floats, 60 * 4);
        assert_eq!(layout.buffer_total_floats, 16 + 240);
        assert_eq!(layout.buffer_total_bytes, (16 + 240) * 4);
    }

    #[test]
    fn write_frame_fills_header_and_nucleons() {
        let mut session = NucleusSession::default();
        session.set_protons(6);
        session.set_neutrons(6);

        let layout = ProtocolLayout::from_config(session.config());
        let mut nucleons = NucleonBuffer::new();
        build_nucleon_buffer(&session, &mut nucleons);

        let mut frame = vec![9.0; layout.buffer_total_floats];
        layout.write_frame(&mut frame, &session, &nucleons);

        assert_eq!(frame[HEADER_INSTANCE_COUNT], 12.0);
        assert_eq!(frame[HEADER_PROTON_SPLIT], 6.0);
        assert_eq!(frame[HEADER_MASS_NUMBER], 12.0);
        assert_eq!(frame[HEADER_RING_COUNT], 3.0);
        assert_eq!(frame[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(frame[15], 0.0);

        let data = &frame[layout.nucleon_data_offset..];
        // Second nucleon: ring 1, angle 0, a proton.
        assert!((data[4] - 36.0 * 0.65).abs() < 1e-4);
        assert_eq!(data[6], 0.0);
        assert_eq!(data[7], 1.0);
        // Seventh nucleon is the first neutron.
        assert_eq!(data[6 * 4 + 2], 1.0);
        // Unused tail is zeroed.
        assert!(data[12 * 4..].iter().all(|&f| f == 0.0));
    }

    #[test]
    fn undersized_frame_is_left_untouched() {
        let session = NucleusSession::default();
        let layout = ProtocolLayout::from_config(session.config());
        let nucleons = NucleonBuffer::new();
        let mut frame = vec![5.0; 4];
        layout.write_frame(&mut frame, &session, &nucleons);
        assert_eq!(frame, vec![5.0; 4]);
    }
}
