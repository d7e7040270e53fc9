//! An open form: controller plus widget bindings and input buffers

use super::binding::{FieldBinding, Widget};
use super::catalog::DemoForm;
use super::controller::{FormController, SubmitOutcome, ValidationMode};
use super::error::FormError;
use super::field::FieldValue;
use super::form_state::FormValues;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons shown on the last row of every form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Reset,
    Submit,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Reset, FormButton::Submit];

    pub fn label(&self) -> &'static str {
        match self {
            FormButton::Reset => "Reset",
            FormButton::Submit => "Submit",
        }
    }
}

/// Raw widget state that is not part of the form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    /// Typed text for text and number inputs
    pub text: String,
    /// Highlighted option for choice widgets
    pub cursor: usize,
}

/// State of one open form
#[derive(Debug, Clone)]
pub struct FormSession {
    pub form: DemoForm,
    pub controller: FormController,
    pub bindings: Vec<FieldBinding>,
    pub inputs: Vec<InputBuffer>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: usize,
}

impl FormSession {
    /// Open `form`, optionally overriding its validation mode
    pub fn open(
        form: DemoForm,
        mode_override: Option<ValidationMode>,
        strict: bool,
    ) -> Result<Self, FormError> {
        let schema = form.schema()?;
        let mode = mode_override.unwrap_or_else(|| form.mode());
        let controller = FormController::new(schema, mode).strict(strict);
        let bindings = form.bindings();
        let inputs = vec![InputBuffer::default(); bindings.len()];
        tracing::info!(form = form.title(), mode = mode.label(), "opened form");
        Ok(Self {
            form,
            controller,
            bindings,
            inputs,
            active_field_index: 0,
            selected_button: 1,
        })
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.bindings.len()
    }

    pub fn selected_button(&self) -> FormButton {
        FormButton::ALL[self.selected_button.min(FormButton::ALL.len() - 1)]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn active_binding(&self) -> Option<&FieldBinding> {
        self.bindings.get(self.active_field_index)
    }

    /// Blur the active field, then move focus forward
    pub fn focus_next(&mut self) -> Result<(), FormError> {
        self.blur_active()?;
        self.next_field();
        Ok(())
    }

    /// Blur the active field, then move focus backward
    pub fn focus_prev(&mut self) -> Result<(), FormError> {
        self.blur_active()?;
        self.prev_field();
        Ok(())
    }

    fn blur_active(&mut self) -> Result<(), FormError> {
        match self.bindings.get(self.active_field_index) {
            Some(binding) => self.controller.blur_field(&binding.name),
            None => Ok(()),
        }
    }

    /// Type a character into the active text or number input
    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        let index = self.active_field_index;
        let Some(binding) = self.bindings.get(index) else {
            return Ok(());
        };
        if !binding.widget.accepts_text() {
            return Ok(());
        }
        self.inputs[index].text.push(c);
        self.sync_text(index)
    }

    /// Remove the last character from the active text or number input
    pub fn backspace(&mut self) -> Result<(), FormError> {
        let index = self.active_field_index;
        let Some(binding) = self.bindings.get(index) else {
            return Ok(());
        };
        if !binding.widget.accepts_text() {
            return Ok(());
        }
        self.inputs[index].text.pop();
        self.sync_text(index)
    }

    fn sync_text(&mut self, index: usize) -> Result<(), FormError> {
        let binding = &self.bindings[index];
        let text = &self.inputs[index].text;
        let value = match binding.widget {
            Widget::NumberInput => parse_number(text),
            _ => FieldValue::Text(text.clone()),
        };
        self.controller.set_field_value(&binding.name, value)
    }

    /// Move between options of the active choice widget
    ///
    /// Selects and radios change the value immediately; checkbox groups only
    /// move the highlighted option.
    pub fn cycle_option(&mut self, forward: bool) -> Result<(), FormError> {
        let index = self.active_field_index;
        let Some(binding) = self.bindings.get(index) else {
            return Ok(());
        };
        let options = binding.widget.options();
        if options.is_empty() {
            return Ok(());
        }

        let selected = self
            .controller
            .value(&binding.name)
            .and_then(|value| options.iter().position(|o| o == value.as_text()));
        let input = &mut self.inputs[index];
        let current = match binding.widget {
            Widget::CheckboxGroup(_) => Some(input.cursor),
            _ => selected,
        };
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        input.cursor = next;

        match binding.widget {
            Widget::Select(_) | Widget::Radio(_) => {
                let value = FieldValue::Text(options[next].clone());
                self.controller.set_field_value(&binding.name, value)
            }
            _ => Ok(()),
        }
    }

    /// Toggle the active checkbox, or the highlighted option of a group
    pub fn toggle(&mut self) -> Result<(), FormError> {
        let index = self.active_field_index;
        let Some(binding) = self.bindings.get(index) else {
            return Ok(());
        };
        let current = self
            .controller
            .value(&binding.name)
            .cloned()
            .unwrap_or_default();
        let value = match &binding.widget {
            Widget::Checkbox => FieldValue::Bool(!current.as_bool()),
            Widget::CheckboxGroup(options) => {
                let Some(option) = options.get(self.inputs[index].cursor) else {
                    return Ok(());
                };
                let mut value = current;
                value.toggle_member(option);
                value
            }
            _ => return Ok(()),
        };
        self.controller.set_field_value(&binding.name, value)
    }

    /// Validate and, if valid, return the submitted values
    pub fn submit(&mut self) -> Option<FormValues> {
        let mut submitted = None;
        let outcome = self.controller.submit(|values| submitted = Some(values));
        if let SubmitOutcome::Invalid(errors) = &outcome {
            tracing::info!(
                form = self.form.title(),
                failing = errors.len(),
                "submit blocked by validation errors"
            );
            // Focus the first failing field
            if let Some(position) = self
                .bindings
                .iter()
                .position(|b| errors.contains_key(&b.name))
            {
                self.active_field_index = position;
            }
        }
        submitted
    }

    /// Clear all values, errors and input buffers
    pub fn reset(&mut self) {
        self.controller.reset();
        self.inputs = vec![InputBuffer::default(); self.bindings.len()];
        self.active_field_index = 0;
        tracing::debug!(form = self.form.title(), "reset form");
    }
}

impl Form for FormSession {
    fn field_count(&self) -> usize {
        self.bindings.len() + 1 // fields plus buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.bindings.len());
    }
}

/// Empty input is no value; anything unparsable is NaN
fn parse_number(text: &str) -> FieldValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return FieldValue::Null;
    }
    FieldValue::Number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}
