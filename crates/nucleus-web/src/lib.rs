//! Browser bridge for the nuclear structure lab.
//!
//! One `LabRunner` lives in a `thread_local!`; every export applies its event
//! immediately and republishes the shared frame. TypeScript reads the frame
//! through `get_frame_ptr` (layout in `nucleus_core::bridge::protocol`) and the
//! full render tuple through `get_snapshot_json`.

pub mod runner;

pub use runner::LabRunner;

use std::cell::RefCell;

use nucleus_core::{input::events, CountInput, LabConfig, LabInput, QuizMode};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<LabRunner>> = RefCell::new(None);
}

/// Seed for `randomize`, drawn from the browser.
fn host_seed() -> u64 {
    let random = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    let now = js_sys::Date::now() as u64;
    random ^ now.rotate_left(21)
}

/// Run `f` against the runner, creating it with defaults on first use.
fn with_runner<R>(f: impl FnOnce(&mut LabRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(|| LabRunner::new(LabConfig::default(), host_seed()));
        f(runner)
    })
}

fn dispatch(input: LabInput) {
    with_runner(|r| r.dispatch(input));
}

#[wasm_bindgen]
pub fn lab_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = LabRunner::new(LabConfig::default(), host_seed());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("nuclear-lab: initialized");
}

/// Apply a JSON config. Returns false (and keeps the old config) on error.
#[wasm_bindgen]
pub fn lab_load_config(json: &str) -> bool {
    with_runner(|r| match r.load_config(json) {
        Ok(()) => true,
        Err(err) => {
            log::error!("nuclear-lab: config rejected: {}", err);
            false
        }
    })
}

// ---- Input events ----

#[wasm_bindgen]
pub fn lab_set_protons(z: f64) {
    dispatch(LabInput::SetProtons(CountInput::Value(z)));
}

#[wasm_bindgen]
pub fn lab_set_protons_text(text: &str) {
    dispatch(LabInput::SetProtons(CountInput::Text(text.to_string())));
}

#[wasm_bindgen]
pub fn lab_set_neutrons(n: f64) {
    dispatch(LabInput::SetNeutrons(CountInput::Value(n)));
}

#[wasm_bindgen]
pub fn lab_set_neutrons_text(text: &str) {
    dispatch(LabInput::SetNeutrons(CountInput::Text(text.to_string())));
}

#[wasm_bindgen]
pub fn lab_randomize() {
    dispatch(LabInput::Randomize);
}

#[wasm_bindgen]
pub fn lab_reset() {
    dispatch(LabInput::Reset);
}

/// `mode`: 0 = off, 1 = find A, 2 = find N, 3 = find Z. Unknown codes are ignored.
#[wasm_bindgen]
pub fn lab_select_quiz_mode(mode: u32) {
    match QuizMode::from_code(mode) {
        Some(mode) => dispatch(LabInput::SelectQuizMode(mode)),
        None => log::warn!("nuclear-lab: unknown quiz mode {}", mode),
    }
}

#[wasm_bindgen]
pub fn lab_edit_answer(text: &str) {
    dispatch(LabInput::EditAnswer(text.to_string()));
}

/// Check the current answer. Returns the verdict code (0 unanswered, 1 correct, 2 incorrect).
#[wasm_bindgen]
pub fn lab_submit_answer() -> u32 {
    with_runner(|r| {
        r.dispatch(LabInput::SubmitAnswer);
        r.session().verdict().code()
    })
}

/// Numeric event path, see `nucleus_core::input::events`.
#[wasm_bindgen]
pub fn lab_custom_event(kind: u32, a: f64) {
    match LabInput::from_custom(kind, a) {
        Some(input) => dispatch(input),
        None if kind == events::SELECT_QUIZ_MODE => {
            log::warn!("nuclear-lab: unknown quiz mode {}", a)
        }
        None => log::warn!("nuclear-lab: unknown custom event {}", kind),
    }
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

#[wasm_bindgen]
pub fn get_max_nucleons() -> u32 {
    with_runner(|r| r.max_nucleons())
}

#[wasm_bindgen]
pub fn get_snapshot_json() -> String {
    with_runner(|r| r.snapshot_json())
}

#[wasm_bindgen]
pub fn get_element_symbol() -> String {
    with_runner(|r| r.session().element_identity().symbol)
}

#[wasm_bindgen]
pub fn get_element_name() -> String {
    with_runner(|r| r.session().element_identity().name)
}

#[wasm_bindgen]
pub fn get_isotope_notation() -> String {
    with_runner(|r| r.session().isotope_notation().to_string())
}

#[wasm_bindgen]
pub fn get_stability_text() -> String {
    with_runner(|r| r.session().stability_text().to_string())
}

#[wasm_bindgen]
pub fn get_quiz_prompt() -> Option<String> {
    with_runner(|r| r.session().quiz_prompt())
}

#[wasm_bindgen]
pub fn get_answer() -> String {
    with_runner(|r| r.session().answer().to_string())
}

#[wasm_bindgen]
pub fn get_feedback() -> Option<String> {
    with_runner(|r| r.session().feedback().map(str::to_string))
}
