//! JSON-friendly view of everything a renderer needs for one frame.

use glam::Vec2;
use serde::Serialize;

use crate::elements::ElementIdentity;
use crate::session::quiz::{QuizMode, Verdict};
use crate::session::stability::StabilityHint;
use crate::session::NucleusSession;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabSnapshot {
    pub revision: u32,
    pub protons: u32,
    pub neutrons: u32,
    pub mass_number: u32,
    pub element: ElementIdentity,
    /// Unicode form, e.g. "¹⁶₈O".
    pub notation: String,
    /// Hyphen form, e.g. "O-16".
    pub notation_plain: String,
    /// TeX form, e.g. "^{16}_{8}O".
    pub notation_tex: String,
    pub stability: StabilityHint,
    pub stability_text: String,
    pub proton_positions: Vec<Vec2>,
    pub neutron_positions: Vec<Vec2>,
    pub layout_extent: f32,
    pub nucleon_radius: f32,
    pub quiz_mode: QuizMode,
    pub quiz_prompt: Option<String>,
    pub answer: String,
    pub verdict: Verdict,
    pub feedback: Option<String>,
}

impl LabSnapshot {
    pub fn capture(session: &NucleusSession) -> Self {
        let notation = session.isotope_notation();
        Self {
            revision: session.revision(),
            protons: session.protons(),
            neutrons: session.neutrons(),
            mass_number: session.mass_number(),
            element: session.element_identity(),
            notation: notation.to_string(),
            notation_plain: notation.hyphenated(),
            notation_tex: notation.tex(),
            stability: session.stability_hint(),
            stability_text: session.stability_text().to_string(),
            proton_positions: session.proton_positions().to_vec(),
            neutron_positions: session.neutron_positions().to_vec(),
            layout_extent: session.layout_extent(),
            nucleon_radius: session.config().nucleon_radius,
            quiz_mode: session.quiz_mode(),
            quiz_prompt: session.quiz_prompt(),
            answer: session.answer().to_string(),
            verdict: session.verdict(),
            feedback: session.feedback().map(str::to_string),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
