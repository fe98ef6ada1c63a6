//! Practice quiz: "find A / N / Z" against the current nucleus.

use serde::{Deserialize, Serialize};

use crate::text::Locale;

/// Which quantity the student must compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    #[default]
    Disabled,
    FindA,
    FindN,
    FindZ,
}

impl QuizMode {
    pub const ALL: [QuizMode; 4] = [Self::Disabled, Self::FindA, Self::FindN, Self::FindZ];

    /// Wire code used by the numeric event bridge and buffer header.
    pub fn code(&self) -> u32 {
        match self {
            Self::Disabled => 0,
            Self::FindA => 1,
            Self::FindN => 2,
            Self::FindZ => 3,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// The value a correct answer must equal, or `None` when disabled.
    pub fn target(&self, protons: u32, neutrons: u32) -> Option<u32> {
        match self {
            Self::Disabled => None,
            Self::FindA => Some(protons + neutrons),
            Self::FindN => Some(neutrons),
            Self::FindZ => Some(protons),
        }
    }
}

/// Result of the last submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn code(&self) -> u32 {
        match self {
            Self::Unanswered => 0,
            Self::Correct => 1,
            Self::Incorrect => 2,
        }
    }

    /// Localized feedback line; nothing to show while unanswered.
    pub fn feedback(&self, locale: Locale) -> Option<&'static str> {
        match self {
            Self::Unanswered => None,
            Self::Correct => Some(locale.correct_feedback()),
            Self::Incorrect => Some(locale.incorrect_feedback()),
        }
    }
}

/// Mode, answer buffer and verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub mode: QuizMode,
    pub answer: String,
    pub verdict: Verdict,
}

impl QuizState {
    /// Switch mode. Always clears the answer and verdict, even when the mode
    /// is unchanged.
    pub fn select(&mut self, mode: QuizMode) {
        self.mode = mode;
        self.clear();
    }

    pub fn clear(&mut self) {
        self.answer.clear();
        self.verdict = Verdict::Unanswered;
    }

    /// The target moved; the old verdict no longer applies.
    pub fn invalidate_verdict(&mut self) {
        self.verdict = Verdict::Unanswered;
    }
}

/// Grade an answer against a target. Text that is not a finite number is
/// incorrect.
pub fn grade(answer: &str, target: u32) -> Verdict {
    match parse_answer(answer) {
        Some(value) if value == target as f64 => Verdict::Correct,
        _ => Verdict::Incorrect,
    }
}

fn parse_answer(answer: &str) -> Option<f64> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// What the student is given for a mode, as (label, value) pairs.
pub fn givens(mode: QuizMode, protons: u32, neutrons: u32) -> Vec<(&'static str, u32)> {
    let mass = protons + neutrons;
    match mode {
        QuizMode::Disabled => Vec::new(),
        QuizMode::FindA => vec![("Z", protons), ("N", neutrons)],
        QuizMode::FindN => vec![("Z", protons), ("A", mass)],
        QuizMode::FindZ => vec![("N", neutrons), ("A", mass)],
    }
}

/// Task sentence for the active mode, e.g. "Given: Z = 6, N = 6. Find A."
pub fn prompt(mode: QuizMode, protons: u32, neutrons: u32, locale: Locale) -> Option<String> {
    let unknown = match mode {
        QuizMode::Disabled => return None,
        QuizMode::FindA => "A",
        QuizMode::FindN => "N",
        QuizMode::FindZ => "Z",
    };
    let given = givens(mode, protons, neutrons)
        .into_iter()
        .map(|(label, value)| format!("{} = {}", label, value))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "{}: {}. {} {}.",
        locale.given_word(),
        given,
        locale.find_word(),
        unknown
    ))
}
