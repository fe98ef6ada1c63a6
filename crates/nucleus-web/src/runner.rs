use nucleus_core::{
    build_nucleon_buffer, LabConfig, LabInput, LabResult, NucleonBuffer, NucleusSession,
    ProtocolLayout,
};

/// Owns the session and the shared frame buffer.
///
/// Every event is applied synchronously and the frame is republished before
/// the call returns, so the browser never reads a half-updated state.
pub struct LabRunner {
    session: NucleusSession,
    nucleons: NucleonBuffer,
    layout: ProtocolLayout,
    /// Header + nucleon data, read by TypeScript through `frame_ptr`.
    frame: Vec<f32>,
}

impl LabRunner {
    pub fn new(config: LabConfig, seed: u64) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        let mut runner = Self {
            nucleons: NucleonBuffer::with_capacity(layout.max_nucleons),
            frame: vec![0.0; layout.buffer_total_floats],
            session: NucleusSession::new(config, seed),
            layout,
        };
        runner.publish();
        runner
    }

    pub fn session(&self) -> &NucleusSession {
        &self.session
    }

    /// Apply one input event and republish the frame.
    pub fn dispatch(&mut self, input: LabInput) {
        self.session.apply(&input);
        self.publish();
    }

    /// Replace the config from JSON. On error the current config stays.
    pub fn load_config(&mut self, json: &str) -> LabResult<()> {
        let config = LabConfig::from_json(json)?;
        self.layout = ProtocolLayout::from_config(&config);
        self.frame = vec![0.0; self.layout.buffer_total_floats];
        self.session.set_config(config);
        self.publish();
        Ok(())
    }

    /// Rebuild the nucleon buffer and rewrite the shared frame.
    fn publish(&mut self) {
        build_nucleon_buffer(&self.session, &mut self.nucleons);
        self.layout.write_frame(&mut self.frame, &self.session, &self.nucleons);
    }

    /// Current snapshot as JSON; "{}" if serialization fails.
    pub fn snapshot_json(&self) -> String {
        match self.session.snapshot().to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("Snapshot serialization failed: {}", err);
                "{}".to_string()
            }
        }
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn max_nucleons(&self) -> u32 {
        self.layout.max_nucleons as u32
    }
}
