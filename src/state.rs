//! Ephemeral view state.
//!
//! One owned struct holds everything the page view can change: selected
//! language, search query, per-step disclosure flags, modal visibility, form
//! field values, and the submit-in-flight guard. The state lives for a
//! single page build and is reset by construction; the immutable content in
//! [`crate::content`] is never touched.

use crate::consult::ConsultForm;
use crate::content::{Step, STEPS, STEP_COUNT};
use crate::filter::filter_steps;
use crate::i18n::Language;

/// Number of step cards that start open.
const DEFAULT_OPEN_PANELS: usize = 3;

/// Mutable UI state for one rendered view.
#[derive(Debug, Clone)]
pub struct UiState {
    language: Language,
    query: String,
    panels: [bool; STEP_COUNT],
    consult_open: bool,
    submitting: bool,
    /// Current consultation-form field values
    pub form: ConsultForm,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Fresh state: canonical language, empty query, first three step cards
    /// open, modal closed, empty form.
    pub fn new() -> UiState {
        let mut panels = [false; STEP_COUNT];
        for flag in panels.iter_mut().take(DEFAULT_OPEN_PANELS) {
            *flag = true;
        }

        UiState {
            language: Language::canonical(),
            query: String::new(),
            panels,
            consult_open: false,
            submitting: false,
            form: ConsultForm::default(),
        }
    }

    // ==================== Language ====================

    /// Currently selected language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the display language.
    ///
    /// Only the displayed text branch changes; the query, panel flags and
    /// form fields all survive the switch.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    // ==================== Search ====================

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query; the visible-step view is re-derived on read.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Steps matching the current query, in original order.
    pub fn visible_steps(&self) -> Vec<&'static Step> {
        filter_steps(&STEPS, &self.query)
    }

    // ==================== Panel Disclosure ====================

    /// Whether the step card at `index` is open.
    pub fn panel_open(&self, index: usize) -> bool {
        self.panels.get(index).copied().unwrap_or(false)
    }

    /// Flip one step card's open/closed flag. Out-of-range indexes are
    /// ignored; other cards are unaffected.
    pub fn toggle_panel(&mut self, index: usize) {
        if let Some(flag) = self.panels.get_mut(index) {
            *flag = !*flag;
        }
    }

    // ==================== Consultation Modal ====================

    /// Whether the consultation modal is shown.
    pub fn consult_open(&self) -> bool {
        self.consult_open
    }

    /// Show the consultation modal.
    pub fn open_consult(&mut self) {
        self.consult_open = true;
    }

    /// Hide the consultation modal without touching the form fields.
    pub fn close_consult(&mut self) {
        self.consult_open = false;
    }

    // ==================== Submission ====================

    /// Whether a submission is currently outstanding.
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Try to start a submission.
    ///
    /// Returns `false` if one is already outstanding (double-submit guard);
    /// the caller must not send another request in that case.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Record the outcome of a submission.
    ///
    /// Success clears the form and closes the modal; failure preserves both
    /// so the user can retry.
    pub fn finish_submit(&mut self, ok: bool) {
        self.submitting = false;
        if ok {
            self.form.clear();
            self.consult_open = false;
        }
    }
}
