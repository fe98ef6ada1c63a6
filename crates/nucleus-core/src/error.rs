use thiserror::Error;

/// Errors raised while loading or validating a [`LabConfig`](crate::LabConfig).
///
/// Session operations never fail; bad user input clamps or turns into an
/// `Incorrect` verdict instead.
#[derive(Error, Debug)]
pub enum LabError {
    #[error("Config JSON error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Empty {name} range: {min}..={max}")]
    EmptyRange { name: &'static str, min: u32, max: u32 },

    #[error("Proton range must start at 1 or above, got {0}")]
    ProtonFloor(u32),

    #[error("Default {name} {value} outside {min}..={max}")]
    DefaultOutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{name} range max {max} exceeds the limit of {limit}")]
    RangeTooLarge {
        name: &'static str,
        max: u32,
        limit: u32,
    },

    #[error("{name} must be finite and positive, got {value}")]
    InvalidRadius { name: &'static str, value: f32 },
}

pub type LabResult<T> = Result<T, LabError>;
