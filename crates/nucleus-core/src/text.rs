//! UI language selection.

use serde::{Deserialize, Serialize};

/// Language for element names, hints, prompts and feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Prefix of the synthetic element name; the atomic number follows it.
    pub fn fallback_element_prefix(&self) -> &'static str {
        match self {
            Self::En => "Element Z=",
            Self::Ru => "Элемент Z=",
        }
    }

    pub fn correct_feedback(&self) -> &'static str {
        match self {
            Self::En => "Correct!",
            Self::Ru => "Верно!",
        }
    }

    pub fn incorrect_feedback(&self) -> &'static str {
        match self {
            Self::En => "Check your calculation.",
            Self::Ru => "Проверь вычисления.",
        }
    }

    /// "Given: ... Find X." sentence pieces.
    pub(crate) fn given_word(&self) -> &'static str {
        match self {
            Self::En => "Given",
            Self::Ru => "Дано",
        }
    }

    pub(crate) fn find_word(&self) -> &'static str {
        match self {
            Self::En => "Find",
            Self::Ru => "Найдите",
        }
    }
}
