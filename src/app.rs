//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::{LogSink, SubmissionSink};
use crate::state::{AppState, DemoForm, FormButton, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated values are sent
    pub sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance logging submissions
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink::new()))
    }

    /// Create an App with a custom submission sink
    pub fn with_sink(config: &TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let state = AppState {
            mode_override: config.mode_override,
            strict_fields: config.strict_fields(),
            ..Default::default()
        };
        Self {
            state,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Submission dialog (modal)
        if self.state.show_submission {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.show_submission = false;
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Picker => self.handle_picker_key(key)?,
            View::Form => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys in the form picker
    fn handle_picker_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(DemoForm::ALL.len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => {
                if let Some(form) = self.state.selected_form() {
                    self.state.open_form(form)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in an open form
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(session) = self.state.session.as_mut() else {
            self.state.current_view = View::Picker;
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => self.state.close_form(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::RESET_MODIFIER) => {
                session.reset();
                self.state.status_message = Some("Form reset".to_string());
            }
            KeyCode::Tab | KeyCode::Down => session.focus_next()?,
            KeyCode::BackTab | KeyCode::Up => session.focus_prev()?,
            KeyCode::Left if session.is_buttons_row_active() => session.prev_button(),
            KeyCode::Right if session.is_buttons_row_active() => session.next_button(),
            KeyCode::Enter if session.is_buttons_row_active() => match session.selected_button() {
                FormButton::Reset => {
                    session.reset();
                    self.state.status_message = Some("Form reset".to_string());
                }
                FormButton::Submit => self.submit_form().await,
            },
            KeyCode::Enter => self.submit_form().await,
            KeyCode::Left => session.cycle_option(false)?,
            KeyCode::Right => session.cycle_option(true)?,
            // Unbound Ctrl/Cmd chords never edit a field
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER) => {}
            KeyCode::Char(' ')
                if session
                    .active_binding()
                    .is_some_and(|b| !b.widget.accepts_text()) =>
            {
                session.toggle()?;
            }
            KeyCode::Char(c) => session.input_char(c)?,
            KeyCode::Backspace => session.backspace()?,
            _ => {}
        }
        Ok(())
    }

    /// Validate the open form and hand valid values to the sink
    async fn submit_form(&mut self) {
        let Some(session) = self.state.session.as_mut() else {
            return;
        };
        let form = session.form.title();

        let Some(values) = session.submit() else {
            let failing = session.controller.errors().len();
            self.state.status_message = Some(format!("{failing} field(s) need attention"));
            return;
        };

        match self.sink.submit(form, values).await {
            Ok(record) => {
                self.state.status_message = Some(format!("{form} submitted"));
                self.state.last_submission = Some(record);
                self.state.show_submission = true;
            }
            Err(e) => {
                self.push_error(format!("Failed to submit {form}: {e}"));
            }
        }
    }
}
