//! Nucleus session: the single source of truth the renderer reads from.
//!
//! Holds Z, N and the quiz state. A, the element identity and the stability
//! hint are computed from the current Z and N on every read; the nucleon
//! layout is rebuilt by every mutator before it returns.

pub mod notation;
pub mod quiz;
pub mod stability;

use glam::Vec2;

use crate::api::config::{CountRange, LabConfig};
use crate::elements::ElementIdentity;
use crate::input::{CountInput, LabInput};
use crate::layout;
use crate::renderer::snapshot::LabSnapshot;
use crate::rng::Rng;

use notation::IsotopeNotation;
use quiz::{QuizMode, QuizState, Verdict};
use stability::StabilityHint;

/// Neutron offset range used by `randomize`: N = Z + δ, δ ∈ [-1, 3].
const RANDOM_DELTA_MIN: i64 = -1;
const RANDOM_DELTA_MAX: i64 = 3;
/// Revisions count modulo 2^24, the largest range an f32 holds exactly.
const REVISION_WRAP: u32 = 1 << 24;

pub struct NucleusSession {
    config: LabConfig,
    protons: u32,
    neutrons: u32,
    quiz: QuizState,
    /// Layout for the current mass number.
    positions: Vec<Vec2>,
    rng: Rng,
    /// Bumped on every mutation so readers can tell frames apart.
    revision: u32,
}

impl NucleusSession {
    /// Create a session at the configured defaults. `seed` drives `randomize`.
    pub fn new(config: LabConfig, seed: u64) -> Self {
        let protons = config.proton_range.clamp_int(config.default_protons as i64);
        let neutrons = config.neutron_range.clamp_int(config.default_neutrons as i64);
        let mut session = Self {
            config,
            protons,
            neutrons,
            quiz: QuizState::default(),
            positions: Vec::new(),
            rng: Rng::new(seed),
            revision: 0,
        };
        session.relayout();
        session
    }

    // -- Reads --

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Z.
    pub fn protons(&self) -> u32 {
        self.protons
    }

    /// N.
    pub fn neutrons(&self) -> u32 {
        self.neutrons
    }

    /// A = Z + N.
    pub fn mass_number(&self) -> u32 {
        self.protons.saturating_add(self.neutrons)
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn quiz_mode(&self) -> QuizMode {
        self.quiz.mode
    }

    pub fn answer(&self) -> &str {
        &self.quiz.answer
    }

    pub fn verdict(&self) -> Verdict {
        self.quiz.verdict
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn element_identity(&self) -> ElementIdentity {
        ElementIdentity::lookup(self.protons, self.config.locale)
    }

    pub fn isotope_notation(&self) -> IsotopeNotation {
        IsotopeNotation {
            mass_number: self.mass_number(),
            atomic_number: self.protons,
            symbol: self.element_identity().symbol,
        }
    }

    pub fn stability_hint(&self) -> StabilityHint {
        StabilityHint::classify(self.protons, self.neutrons)
    }

    pub fn stability_text(&self) -> &'static str {
        self.stability_hint().text(self.config.locale)
    }

    /// Task sentence for the active quiz mode.
    pub fn quiz_prompt(&self) -> Option<String> {
        quiz::prompt(self.quiz.mode, self.protons, self.neutrons, self.config.locale)
    }

    /// Feedback line for the current verdict.
    pub fn feedback(&self) -> Option<&'static str> {
        self.quiz.verdict.feedback(self.config.locale)
    }

    /// All nucleon positions, protons first.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn proton_positions(&self) -> &[Vec2] {
        &self.positions[..self.protons as usize]
    }

    pub fn neutron_positions(&self) -> &[Vec2] {
        &self.positions[self.protons as usize..]
    }

    /// Number of layout rings in use.
    pub fn ring_count(&self) -> u32 {
        layout::ring_count(self.positions.len())
    }

    /// Outer ring radius of the current layout.
    pub fn layout_extent(&self) -> f32 {
        layout::layout_extent(self.positions.len(), self.config.ring_base_radius)
    }

    pub fn snapshot(&self) -> LabSnapshot {
        LabSnapshot::capture(self)
    }

    // -- Mutations --

    /// Set Z from an integer, clamped into the proton range.
    pub fn set_protons(&mut self, z: i64) {
        let clamped = self.config.proton_range.clamp_int(z);
        warn_if_clamped("Z", z as f64, clamped);
        self.store_protons(clamped);
    }

    /// Set N from an integer, clamped into the neutron range.
    pub fn set_neutrons(&mut self, n: i64) {
        let clamped = self.config.neutron_range.clamp_int(n);
        warn_if_clamped("N", n as f64, clamped);
        self.store_neutrons(clamped);
    }

    /// Set Z from slider or field input. Non-numeric input means the lower bound.
    pub fn set_protons_input(&mut self, input: &CountInput) {
        let clamped = clamp_input(&self.config.proton_range, "Z", input);
        self.store_protons(clamped);
    }

    /// Set N from slider or field input. Non-numeric input means the lower bound.
    pub fn set_neutrons_input(&mut self, input: &CountInput) {
        let clamped = clamp_input(&self.config.neutron_range, "N", input);
        self.store_neutrons(clamped);
    }

    /// Back to the configured defaults with the quiz off.
    pub fn reset(&mut self) {
        self.protons = self.config.proton_range.clamp_int(self.config.default_protons as i64);
        self.neutrons = self.config.neutron_range.clamp_int(self.config.default_neutrons as i64);
        self.quiz.select(QuizMode::Disabled);
        self.relayout();
        log::info!("Session reset to Z={} N={}", self.protons, self.neutrons);
    }

    /// Pick a random Z, then N = max(0, Z + δ) with δ ∈ [-1, 3]. Turns the quiz off.
    pub fn randomize(&mut self) {
        let range = self.config.proton_range;
        let z = self.rng.range_inclusive(range.min as i64, range.max as i64);
        let delta = self.rng.range_inclusive(RANDOM_DELTA_MIN, RANDOM_DELTA_MAX);
        self.protons = range.clamp_int(z);
        self.neutrons = self.config.neutron_range.clamp_int((z + delta).max(0));
        self.quiz.select(QuizMode::Disabled);
        self.relayout();
        log::info!("Randomized to Z={} N={}", self.protons, self.neutrons);
    }

    /// Select a quiz mode. Clears the answer and verdict, also when the mode
    /// does not change.
    pub fn set_quiz_mode(&mut self, mode: QuizMode) {
        log::debug!("Quiz mode {:?} -> {:?}", self.quiz.mode, mode);
        self.quiz.select(mode);
        self.bump_revision();
    }

    /// Replace the answer buffer. Ignored while the quiz is off.
    pub fn edit_answer(&mut self, text: &str) {
        if !self.quiz.mode.is_active() {
            return;
        }
        self.quiz.answer.clear();
        self.quiz.answer.push_str(text);
        self.bump_revision();
    }

    /// Store `text` as the answer and grade it.
    pub fn submit_answer(&mut self, text: &str) -> Verdict {
        self.edit_answer(text);
        self.submit_current_answer()
    }

    /// Grade the answer buffer against the active mode's target.
    /// While the quiz is off nothing happens and the verdict stays Unanswered.
    pub fn submit_current_answer(&mut self) -> Verdict {
        let Some(target) = self.quiz.mode.target(self.protons, self.neutrons) else {
            return self.quiz.verdict;
        };
        self.quiz.verdict = quiz::grade(&self.quiz.answer, target);
        self.bump_revision();
        log::debug!(
            "Answer {:?} for {:?} (target {}): {:?}",
            self.quiz.answer,
            self.quiz.mode,
            target,
            self.quiz.verdict
        );
        self.quiz.verdict
    }

    /// Swap in a new config. Z and N are clamped into the new ranges; the
    /// quiz is left alone unless that moves the target.
    pub fn set_config(&mut self, config: LabConfig) {
        let protons = config.proton_range.clamp_int(self.protons as i64);
        let neutrons = config.neutron_range.clamp_int(self.neutrons as i64);
        self.config = config;
        if protons != self.protons || neutrons != self.neutrons {
            self.quiz.invalidate_verdict();
        }
        self.protons = protons;
        self.neutrons = neutrons;
        self.relayout();
        log::info!("Config applied (locale {:?})", self.config.locale);
    }

    /// Apply one input event.
    pub fn apply(&mut self, input: &LabInput) {
        match input {
            LabInput::SetProtons(value) => self.set_protons_input(value),
            LabInput::SetNeutrons(value) => self.set_neutrons_input(value),
            LabInput::Randomize => self.randomize(),
            LabInput::Reset => self.reset(),
            LabInput::SelectQuizMode(mode) => self.set_quiz_mode(*mode),
            LabInput::EditAnswer(text) => self.edit_answer(text),
            LabInput::SubmitAnswer => {
                self.submit_current_answer();
            }
        }
    }

    // -- Internals --

    fn store_protons(&mut self, z: u32) {
        if z == self.protons {
            return;
        }
        log::debug!("Z {} -> {}", self.protons, z);
        self.protons = z;
        self.quiz.invalidate_verdict();
        self.relayout();
    }

    fn store_neutrons(&mut self, n: u32) {
        if n == self.neutrons {
            return;
        }
        log::debug!("N {} -> {}", self.neutrons, n);
        self.neutrons = n;
        self.quiz.invalidate_verdict();
        self.relayout();
    }

    fn bump_revision(&mut self) {
        self.revision = (self.revision + 1) % REVISION_WRAP;
    }

    fn relayout(&mut self) {
        self.positions = layout::layout(self.mass_number() as usize, self.config.ring_base_radius);
        self.bump_revision();
    }
}

impl Default for NucleusSession {
    fn default() -> Self {
        Self::new(LabConfig::default(), 42)
    }
}

fn clamp_input(range: &CountRange, label: &str, input: &CountInput) -> u32 {
    match input {
        CountInput::Value(v) => {
            let clamped = range.clamp_value(*v);
            warn_if_clamped(label, *v, clamped);
            clamped
        }
        CountInput::Text(text) => {
            let clamped = range.clamp_text(text);
            if text.trim().parse::<f64>().is_err() {
                log::warn!("{} input {:?} is not a number, using {}", label, text, clamped);
            }
            clamped
        }
    }
}

fn warn_if_clamped(label: &str, raw: f64, clamped: u32) {
    if raw.is_nan() || raw.trunc() != clamped as f64 {
        log::warn!("{} input {} clamped to {}", label, raw, clamped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> NucleusSession {
        NucleusSession::default()
    }

    #[test]
    fn starts_at_oxygen_16() {
        let s = session();
        assert_eq!((s.protons(), s.neutrons(), s.mass_number()), (8, 8, 16));
        assert_eq!(s.quiz_mode(), QuizMode::Disabled);
        assert_eq!(s.positions().len(), 16);
        assert_eq!(s.element_identity().symbol, "O");
        assert_eq!(s.isotope_notation().hyphenated(), "O-16");
    }

    #[test]
    fn proton_clamping() {
        let mut s = session();
        s.set_protons(25);
        assert_eq!(s.protons(), 20);
        s.set_protons(-3);
        assert_eq!(s.protons(), 1);
        s.set_protons(10);
        s.set_protons_input(&CountInput::Value(f64::NAN));
        assert_eq!(s.protons(), 1);
        s.set_protons(10);
        s.set_protons_input(&CountInput::Text("abc".into()));
        assert_eq!(s.protons(), 1);
    }

    #[test]
    fn neutron_clamping() {
        let mut s = session();
        s.set_neutrons(99);
        assert_eq!(s.neutrons(), 40);
        s.set_neutrons_input(&CountInput::Text("x".into()));
        assert_eq!(s.neutrons(), 0);
        s.set_neutrons_input(&CountInput::Value(12.7));
        assert_eq!(s.neutrons(), 12);
    }

    #[test]
    fn layout_tracks_mass_number() {
        let mut s = session();
        s.set_protons(11);
        s.set_neutrons(12);
        assert_eq!(s.mass_number(), 23);
        assert_eq!(s.positions().len(), 23);
        assert_eq!(s.proton_positions().len(), 11);
        assert_eq!(s.neutron_positions().len(), 12);
        assert_eq!(s.positions(), layout::layout(23, 36.0).as_slice());
    }

    #[test]
    fn find_a_quiz() {
        let mut s = session();
        s.set_protons(6);
        s.set_neutrons(6);
        s.set_quiz_mode(QuizMode::FindA);
        assert_eq!(s.submit_answer("12"), Verdict::Correct);
        assert_eq!(s.feedback(), Some("Correct!"));
        assert_eq!(s.submit_answer("11"), Verdict::Incorrect);
        assert_eq!(s.submit_answer("abc"), Verdict::Incorrect);
        assert_eq!(s.feedback(), Some("Check your calculation."));
    }

    #[test]
    fn find_n_quiz() {
        let mut s = session();
        s.set_protons(11);
        s.set_neutrons(12);
        s.set_quiz_mode(QuizMode::FindN);
        assert_eq!(s.submit_answer("12"), Verdict::Correct);
        assert_eq!(s.quiz_prompt().as_deref(), Some("Given: Z = 11, A = 23. Find N."));
    }

    #[test]
    fn find_z_quiz() {
        let mut s = session();
        s.set_protons(20);
        s.set_neutrons(20);
        s.set_quiz_mode(QuizMode::FindZ);
        assert_eq!(s.submit_answer("20"), Verdict::Correct);
        assert_eq!(s.submit_answer("40"), Verdict::Incorrect);
    }

    #[test]
    fn correct_answer_does_not_lock_mode() {
        let mut s = session();
        s.set_quiz_mode(QuizMode::FindA);
        s.submit_answer("16");
        assert_eq!(s.quiz_mode(), QuizMode::FindA);
        assert_eq!(s.submit_answer("15"), Verdict::Incorrect);
    }

    #[test]
    fn submit_while_disabled_is_noop() {
        let mut s = session();
        assert_eq!(s.submit_answer("16"), Verdict::Unanswered);
        assert_eq!(s.answer(), "");
        assert_eq!(s.verdict(), Verdict::Unanswered);
    }

    #[test]
    fn mode_change_clears_answer_and_verdict() {
        let mut s = session();
        s.set_quiz_mode(QuizMode::FindA);
        s.submit_answer("16");
        s.set_quiz_mode(QuizMode::FindN);
        assert_eq!(s.answer(), "");
        assert_eq!(s.verdict(), Verdict::Unanswered);

        s.submit_answer("3");
        s.set_quiz_mode(QuizMode::FindN);
        assert_eq!(s.answer(), "");
        assert_eq!(s.verdict(), Verdict::Unanswered);
    }

    #[test]
    fn count_change_keeps_answer_but_clears_verdict() {
        let mut s = session();
        s.set_quiz_mode(QuizMode::FindA);
        s.submit_answer("16");
        assert_eq!(s.verdict(), Verdict::Correct);

        s.set_neutrons(9);
        assert_eq!(s.quiz_mode(), QuizMode::FindA);
        assert_eq!(s.answer(), "16");
        assert_eq!(s.verdict(), Verdict::Unanswered);

        // Re-checking the kept text grades it against the new target.
        assert_eq!(s.submit_current_answer(), Verdict::Incorrect);
    }

    #[test]
    fn same_value_keeps_verdict() {
        let mut s = session();
        s.set_quiz_mode(QuizMode::FindZ);
        s.submit_answer("8");
        s.set_protons(8);
        assert_eq!(s.verdict(), Verdict::Correct);
    }

    #[test]
    fn editing_answer_while_disabled_is_ignored() {
        let mut s = session();
        s.edit_answer("5");
        assert_eq!(s.answer(), "");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = session();
        s.set_protons(3);
        s.set_neutrons(30);
        s.set_quiz_mode(QuizMode::FindZ);
        s.submit_answer("3");
        s.reset();
        assert_eq!((s.protons(), s.neutrons()), (8, 8));
        assert_eq!(s.quiz(), &QuizState::default());
        assert_eq!(s.positions().len(), 16);
    }

    #[test]
    fn randomize_stays_in_bounds_and_disables_quiz() {
        let mut s = session();
        for _ in 0..200 {
            s.set_quiz_mode(QuizMode::FindA);
            s.submit_answer("1");
            s.randomize();
            let (z, n) = (s.protons(), s.neutrons());
            assert!((1..=20).contains(&z), "Z out of range: {}", z);
            assert!(n + 1 >= z && n <= z + 3, "N={} not within Z-1..Z+3 for Z={}", n, z);
            assert_eq!(s.quiz(), &QuizState::default());
            assert_eq!(s.positions().len() as u32, z + n);
        }
    }

    #[test]
    fn stability_scenarios() {
        let mut s = session();
        s.set_protons(6);
        s.set_neutrons(6);
        assert_eq!(s.stability_hint(), StabilityHint::LightBalanced);
        s.set_protons(20);
        s.set_neutrons(20);
        assert_eq!(s.stability_hint(), StabilityHint::HeavyNeutronPoor);
        s.set_neutrons(22);
        assert_eq!(s.stability_hint(), StabilityHint::HeavyNeutronRich);
        assert_eq!(s.stability_text(), "heavier nucleus, N > Z consistent with stability trend");
    }

    #[test]
    fn apply_dispatches_events() {
        let mut s = session();
        s.apply(&LabInput::SetProtons(CountInput::Value(6.0)));
        s.apply(&LabInput::SetNeutrons(CountInput::Text("6".into())));
        s.apply(&LabInput::SelectQuizMode(QuizMode::FindA));
        s.apply(&LabInput::EditAnswer("12".into()));
        s.apply(&LabInput::SubmitAnswer);
        assert_eq!(s.verdict(), Verdict::Correct);
        s.apply(&LabInput::Reset);
        assert_eq!(s.mass_number(), 16);
    }

    #[test]
    fn revision_wraps_before_losing_f32_precision() {
        let mut s = session();
        s.revision = REVISION_WRAP - 1;
        s.set_protons(9);
        assert_eq!(s.revision(), 0);
        s.set_protons(10);
        assert_eq!(s.revision(), 1);
        assert_eq!((REVISION_WRAP - 1) as f32 as u32, REVISION_WRAP - 1);
    }

    #[test]
    fn revision_advances_on_mutation() {
        let mut s = session();
        let r0 = s.revision();
        s.set_protons(9);
        assert!(s.revision() > r0);
    }

    #[test]
    fn set_config_reclamps_counts() {
        let mut s = session();
        s.set_protons(20);
        let config = LabConfig {
            proton_range: CountRange::new(1, 10),
            ..LabConfig::default()
        };
        s.set_config(config);
        assert_eq!(s.protons(), 10);
        assert_eq!(s.positions().len() as u32, s.mass_number());
    }

    #[test]
    fn russian_locale() {
        let config = LabConfig { locale: crate::text::Locale::Ru, ..LabConfig::default() };
        let mut s = NucleusSession::new(config, 1);
        assert_eq!(s.element_identity().name, "Кислород");
        s.set_protons(21);
        assert_eq!(s.protons(), 20);
        assert_eq!(s.element_identity().name, "Кальций");
    }
}
