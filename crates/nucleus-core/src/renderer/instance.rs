use bytemuck::{Pod, Zeroable};

/// Nucleon role, encoded in `NucleonInstance::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NucleonKind {
    Proton,
    Neutron,
}

impl NucleonKind {
    pub fn code(&self) -> f32 {
        match self {
            Self::Proton => 0.0,
            Self::Neutron => 1.0,
        }
    }
}

/// Per-nucleon render data written to the shared buffer.
/// Must match the TypeScript protocol: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct NucleonInstance {
    /// X offset from the nucleus center.
    pub x: f32,
    /// Y offset from the nucleus center.
    pub y: f32,
    /// 0 = proton, 1 = neutron.
    pub kind: f32,
    /// Ring index the nucleon sits on.
    pub ring: f32,
}

impl NucleonInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Nucleon instances in layout order.
/// Instances [0..proton_split) are protons, [proton_split..] neutrons.
pub struct NucleonBuffer {
    pub instances: Vec<NucleonInstance>,
    pub proton_split: u32,
}

impl NucleonBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            proton_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.proton_split = 0;
    }

    pub fn push(&mut self, instance: NucleonInstance) {
        self.instances.push(instance);
    }

    pub fn set_proton_split(&mut self, split: u32) {
        self.proton_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances as a flat float slice (x, y, kind, ring per nucleon).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for NucleonBuffer {
    fn default() -> Self {
        Self::new()
    }
}
