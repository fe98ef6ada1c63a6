use serde::{Deserialize, Serialize};

use crate::error::{LabError, LabResult};
use crate::text::Locale;

/// Highest Z a config may allow.
pub const PROTON_LIMIT: u32 = 118;
/// Highest N a config may allow.
pub const NEUTRON_LIMIT: u32 = 200;

/// Inclusive bounds for a nucleon count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp an integer into the range.
    pub fn clamp_int(&self, value: i64) -> u32 {
        value.clamp(self.min as i64, self.max as i64) as u32
    }

    /// Clamp a numeric input into the range.
    /// NaN maps to the lower bound; fractions truncate toward zero first.
    pub fn clamp_value(&self, value: f64) -> u32 {
        if value.is_nan() {
            return self.min;
        }
        let truncated = value.trunc();
        if truncated <= self.min as f64 {
            self.min
        } else if truncated >= self.max as f64 {
            self.max
        } else {
            truncated as u32
        }
    }

    /// Parse text from a numeric field and clamp it. Text that is not a number
    /// maps to the lower bound.
    pub fn clamp_text(&self, text: &str) -> u32 {
        self.clamp_value(text.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

/// Lab configuration, provided by the host page or left at defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Allowed Z values (default 1..=20).
    pub proton_range: CountRange,
    /// Allowed N values (default 0..=40).
    pub neutron_range: CountRange,
    /// Z at start and after reset.
    pub default_protons: u32,
    /// N at start and after reset.
    pub default_neutrons: u32,
    /// Base radius for ring-packing; ring k sits at `base * k * 0.65`.
    pub ring_base_radius: f32,
    /// Radius of one nucleon disc, forwarded to renderers.
    pub nucleon_radius: f32,
    /// Language for names, hints and feedback.
    pub locale: Locale,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            proton_range: CountRange::new(1, 20),
            neutron_range: CountRange::new(0, 40),
            default_protons: 8,
            default_neutrons: 8,
            ring_base_radius: 36.0,
            nucleon_radius: 12.0,
            locale: Locale::En,
        }
    }
}

impl LabConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> LabResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LabResult<()> {
        for (name, range) in [("proton", self.proton_range), ("neutron", self.neutron_range)] {
            if range.min > range.max {
                return Err(LabError::EmptyRange { name, min: range.min, max: range.max });
            }
        }
        for (name, range, limit) in [
            ("proton", self.proton_range, PROTON_LIMIT),
            ("neutron", self.neutron_range, NEUTRON_LIMIT),
        ] {
            if range.max > limit {
                return Err(LabError::RangeTooLarge { name, max: range.max, limit });
            }
        }
        if self.proton_range.min < 1 {
            return Err(LabError::ProtonFloor(self.proton_range.min));
        }
        for (name, value, range) in [
            ("protons", self.default_protons, self.proton_range),
            ("neutrons", self.default_neutrons, self.neutron_range),
        ] {
            if !range.contains(value) {
                return Err(LabError::DefaultOutOfRange {
                    name,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        for (name, value) in [
            ("ring_base_radius", self.ring_base_radius),
            ("nucleon_radius", self.nucleon_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LabError::InvalidRadius { name, value });
            }
        }
        Ok(())
    }

    /// Largest mass number the ranges allow; sizes the nucleon buffer.
    pub fn max_nucleons(&self) -> usize {
        (self.proton_range.max as usize).saturating_add(self.neutron_range.max as usize)
    }
}
