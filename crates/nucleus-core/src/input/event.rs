use crate::session::quiz::QuizMode;

/// A value from a slider (number) or a numeric text field (raw text).
#[derive(Debug, Clone, PartialEq)]
pub enum CountInput {
    Value(f64),
    Text(String),
}

/// Input events the lab understands.
/// Each one maps to exactly one session operation.
#[derive(Debug, Clone, PartialEq)]
pub enum LabInput {
    SetProtons(CountInput),
    SetNeutrons(CountInput),
    Randomize,
    Reset,
    SelectQuizMode(QuizMode),
    /// The answer field changed.
    EditAnswer(String),
    /// Check the current answer buffer.
    SubmitAnswer,
}

/// Custom event kinds sent by the UI through the numeric bridge.
pub mod events {
    pub const SET_PROTONS: u32 = 1; // a = Z
    pub const SET_NEUTRONS: u32 = 2; // a = N
    pub const RANDOMIZE: u32 = 3;
    pub const RESET: u32 = 4;
    pub const SELECT_QUIZ_MODE: u32 = 5; // a = QuizMode::code()
    pub const SUBMIT_ANSWER: u32 = 6;
}

impl LabInput {
    /// Decode a numeric custom event. Unknown kinds and unknown or fractional
    /// quiz mode codes give `None`. Text events have no numeric form.
    pub fn from_custom(kind: u32, a: f64) -> Option<Self> {
        match kind {
            events::SET_PROTONS => Some(Self::SetProtons(CountInput::Value(a))),
            events::SET_NEUTRONS => Some(Self::SetNeutrons(CountInput::Value(a))),
            events::RANDOMIZE => Some(Self::Randomize),
            events::RESET => Some(Self::Reset),
            events::SELECT_QUIZ_MODE => {
                if a.is_nan() || a < 0.0 || a.fract() != 0.0 {
                    return None;
                }
                QuizMode::from_code(a as u32).map(Self::SelectQuizMode)
            }
            events::SUBMIT_ANSWER => Some(Self::SubmitAnswer),
            _ => None,
        }
    }
}
