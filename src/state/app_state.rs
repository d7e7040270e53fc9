//! Application state definitions

use super::forms::{DemoForm, FormError, FormSession, ValidationMode};
use crate::sink::SubmissionRecord;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// List of demo forms
    #[default]
    Picker,
    /// An open form session
    Form,
}

/// Application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub selected_index: usize,

    // Form
    pub session: Option<FormSession>,
    pub mode_override: Option<ValidationMode>,
    pub strict_fields: bool,

    // Feedback
    pub errors: VecDeque<String>,
    pub status_message: Option<String>,
    pub last_submission: Option<SubmissionRecord>,
    pub show_submission: bool,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Form highlighted in the picker
    pub fn selected_form(&self) -> Option<DemoForm> {
        DemoForm::ALL.get(self.selected_index).copied()
    }

    /// Open `form` with a fresh state and switch to the form view
    pub fn open_form(&mut self, form: DemoForm) -> Result<(), FormError> {
        let session = FormSession::open(form, self.mode_override, self.strict_fields)?;
        self.session = Some(session);
        self.current_view = View::Form;
        self.status_message = None;
        Ok(())
    }

    /// Discard the open form and go back to the picker
    pub fn close_form(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(form = session.form.title(), "closed form");
        }
        self.current_view = View::Picker;
        self.show_submission = false;
        self.status_message = None;
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
