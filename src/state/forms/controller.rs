//! Field binding and validation controller
//!
//! [`FormController`] owns a [`ValidationSchema`] and the current
//! [`FormState`]. Presentation code pushes changes in through
//! [`set_field_value`](FormController::set_field_value) and
//! [`blur_field`](FormController::blur_field), reads values and errors back
//! through [`field`](FormController::field), and finishes with
//! [`submit`](FormController::submit).
//!
//! All operations are synchronous and run to completion; the controller is
//! not shared between threads.

use super::error::{FieldError, FormError};
use super::field::FieldValue;
use super::form_state::{FieldErrors, FormState, FormValues};
use super::schema::{FieldSchema, ValidationSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// When a field is re-validated outside of submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    OnSubmit,
    OnBlur,
    OnChange,
    /// Blur validates; changes validate once the field has been touched
    OnTouched,
    All,
}

impl ValidationMode {
    fn validates_on_change(&self, touched: bool) -> bool {
        match self {
            Self::OnChange | Self::All => true,
            Self::OnTouched => touched,
            Self::OnSubmit | Self::OnBlur => false,
        }
    }

    fn validates_on_blur(&self) -> bool {
        matches!(self, Self::OnBlur | Self::OnTouched | Self::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnSubmit => "on submit",
            Self::OnBlur => "on blur",
            Self::OnChange => "on change",
            Self::OnTouched => "on touched",
            Self::All => "all",
        }
    }
}

/// Feedback indicator shown next to a bound widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Not validated yet
    Pristine,
    Valid,
    Invalid,
}

/// Read-only view of one field for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct BoundField<'a> {
    pub name: &'a str,
    pub value: &'a FieldValue,
    pub error: Option<&'a FieldError>,
    pub validity: Validity,
    pub touched: bool,
    pub dirty: bool,
}

impl<'a> BoundField<'a> {
    /// Inline help text: the error message, if any
    pub fn help(&self) -> Option<&'a str> {
        self.error.map(|e| e.message.as_str())
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All fields passed; carries the values handed to the callback
    Valid(FormValues),
    /// At least one field failed; the callback was not invoked
    Invalid(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid(_))
    }
}

/// Holds values and errors for a fixed set of named fields
#[derive(Debug, Clone)]
pub struct FormController {
    schema: ValidationSchema,
    state: FormState,
    mode: ValidationMode,
    strict: bool,
    /// Fields whose error entry reflects a completed validation
    validated: BTreeSet<String>,
}

impl FormController {
    /// Create a controller with every field at its schema default
    pub fn new(schema: ValidationSchema, mode: ValidationMode) -> Self {
        let values = schema
            .iter()
            .map(|(name, field)| (name, field.initial_value().clone()))
            .collect();
        Self {
            schema,
            state: FormState::new(values),
            mode,
            strict: false,
            validated: BTreeSet::new(),
        }
    }

    /// Reject unknown field names instead of ignoring them
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// Declare a new field after construction
    pub fn register_field(
        &mut self,
        name: impl Into<String>,
        field: FieldSchema,
    ) -> Result<(), FormError> {
        let name = name.into();
        let initial = field.initial_value().clone();
        self.schema.register(name.clone(), field)?;
        tracing::debug!(field = %name, "registered field");
        self.state.values.insert(name, initial);
        Ok(())
    }

    /// Returns `Ok(false)` for an unknown name in lenient mode
    fn check_known(&self, name: &str) -> Result<bool, FormError> {
        if self.schema.contains(name) {
            Ok(true)
        } else if self.strict {
            Err(FormError::UnknownField(name.to_string()))
        } else {
            tracing::warn!(field = %name, "ignoring update for unknown field");
            Ok(false)
        }
    }

    /// Update a field's value, re-validating it if the mode asks for it
    pub fn set_field_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        if !self.check_known(name)? {
            return Ok(());
        }
        let value = value.into();

        let is_default = self
            .schema
            .get(name)
            .is_some_and(|field| field.initial_value() == &value);
        if is_default {
            self.state.dirty.remove(name);
        } else {
            self.state.dirty.insert(name.to_string());
        }
        self.state.values.insert(name, value);

        let touched = self.state.is_touched(name);
        if self.state.is_submitted || self.mode.validates_on_change(touched) {
            self.trigger(name)?;
        }
        Ok(())
    }

    /// Mark a field as touched, re-validating it if the mode asks for it
    pub fn blur_field(&mut self, name: &str) -> Result<(), FormError> {
        if !self.check_known(name)? {
            return Ok(());
        }
        self.state.touched.insert(name.to_string());
        if self.mode.validates_on_blur() {
            self.trigger(name)?;
        }
        Ok(())
    }

    /// Evaluate one field's rules against its current value
    pub fn validate_field(&self, name: &str) -> Result<Option<FieldError>, FormError> {
        let field = self
            .schema
            .get(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let value = self.state.values.get(name).unwrap_or(&FieldValue::Null);
        Ok(field.validate(name, value))
    }

    /// Validate one field and record the result in the form state
    pub fn trigger(&mut self, name: &str) -> Result<Option<FieldError>, FormError> {
        let error = self.validate_field(name)?;
        match &error {
            Some(error) => {
                self.state.errors.insert(name.to_string(), error.clone());
            }
            None => {
                self.state.errors.remove(name);
            }
        }
        self.validated.insert(name.to_string());
        Ok(error)
    }

    /// Evaluate every declared field. Only failing fields appear in the map.
    pub fn validate_all(&self) -> FieldErrors {
        self.schema
            .iter()
            .filter_map(|(name, field)| {
                let value = self.state.values.get(name).unwrap_or(&FieldValue::Null);
                field
                    .validate(name, value)
                    .map(|error| (name.to_string(), error))
            })
            .collect()
    }

    /// Validate everything and hand a copy of the values to `on_valid` if
    /// nothing failed
    pub fn submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues),
    {
        self.submit_with(on_valid, |_| {})
    }

    /// Like [`submit`](Self::submit), calling `on_invalid` with the errors on
    /// failure
    pub fn submit_with<F, G>(&mut self, on_valid: F, on_invalid: G) -> SubmitOutcome
    where
        F: FnOnce(FormValues),
        G: FnOnce(&FieldErrors),
    {
        let errors = self.validate_all();
        self.state.errors = errors.clone();
        self.state.is_submitted = true;
        self.state.submit_count += 1;
        self.validated = self.schema.names().map(str::to_string).collect();

        if errors.is_empty() {
            tracing::debug!(submit_count = self.state.submit_count, "form valid");
            on_valid(self.state.values.clone());
            SubmitOutcome::Valid(self.state.values.clone())
        } else {
            tracing::debug!(
                submit_count = self.state.submit_count,
                failing = errors.len(),
                "form invalid"
            );
            on_invalid(&errors);
            SubmitOutcome::Invalid(errors)
        }
    }

    /// Restore every field to its default and forget all bookkeeping
    pub fn reset(&mut self) {
        let values = self
            .schema
            .iter()
            .map(|(name, field)| (name, field.initial_value().clone()))
            .collect();
        self.state = FormState::new(values);
        self.validated.clear();
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.state.values.get(name)
    }

    /// Errors recorded by the last blur, change or submit validation
    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.state.errors.get(name)
    }

    /// Whether the current values pass every rule
    pub fn is_valid(&self) -> bool {
        self.validate_all().is_empty()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    /// Bound accessor for a single field
    pub fn field(&self, name: &str) -> Option<BoundField<'_>> {
        let (name, _) = self.schema.iter().find(|(field, _)| *field == name)?;
        let value = self.state.values.get(name).unwrap_or(&FieldValue::Null);
        let error = self.state.errors.get(name);
        let validity = match error {
            Some(_) => Validity::Invalid,
            None if self.validated.contains(name) => Validity::Valid,
            None => Validity::Pristine,
        };
        Some(BoundField {
            name,
            value,
            error,
            validity,
            touched: self.state.is_touched(name),
            dirty: self.state.is_dirty(name),
        })
    }

    /// Bound accessors for all fields in declaration order
    pub fn fields(&self) -> Vec<BoundField<'_>> {
        self.schema
            .names()
            .filter_map(|name| self.field(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::error::RuleKind;

    fn person_schema() -> ValidationSchema {
        ValidationSchema::builder()
            .field("firstName", FieldSchema::string().required())
            .field(
                "age",
                FieldSchema::number().required().positive().integer(),
            )
            .build()
            .unwrap()
    }

    fn controller(mode: ValidationMode) -> FormController {
        FormController::new(person_schema(), mode)
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_with_defaults_and_no_errors() {
            let form = controller(ValidationMode::OnSubmit);
            assert_eq!(form.value("firstName"), Some(&FieldValue::from("")));
            assert_eq!(form.value("age"), Some(&FieldValue::Null));
            assert!(form.errors().is_empty());
            assert_eq!(form.state().submit_count, 0);
        }

        #[test]
        fn test_register_field_adds_default_value() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.register_field("newsletter", FieldSchema::boolean())
                .unwrap();
            assert_eq!(form.value("newsletter"), Some(&FieldValue::Bool(false)));
            assert_eq!(form.schema().len(), 3);
        }

        #[test]
        fn test_register_duplicate_fails() {
            let mut form = controller(ValidationMode::OnSubmit);
            let result = form.register_field("age", FieldSchema::number());
            assert_eq!(result, Err(FormError::DuplicateField("age".to_string())));
        }
    }

    mod set_field_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_updates_value_without_validating_on_submit_mode() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("age", -1).unwrap();
            assert_eq!(form.value("age"), Some(&FieldValue::from(-1)));
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_on_change_mode_validates_eagerly() {
            let mut form = controller(ValidationMode::OnChange);
            form.set_field_value("age", -1).unwrap();
            assert_eq!(form.error("age").unwrap().rule, RuleKind::Positive);
            form.set_field_value("age", 4).unwrap();
            assert!(form.error("age").is_none());
        }

        #[test]
        fn test_unknown_field_is_ignored_in_lenient_mode() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("nickname", "ada").unwrap();
            assert!(form.value("nickname").is_none());
            assert!(!form.errors().contains_key("nickname"));
        }

        #[test]
        fn test_unknown_field_fails_in_strict_mode() {
            let mut form = controller(ValidationMode::OnSubmit).strict(true);
            let result = form.set_field_value("nickname", "ada");
            assert_eq!(
                result,
                Err(FormError::UnknownField("nickname".to_string()))
            );
        }

        #[test]
        fn test_dirty_tracks_difference_from_default() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("firstName", "Ada").unwrap();
            assert!(form.state().is_dirty("firstName"));
            form.set_field_value("firstName", "").unwrap();
            assert!(!form.state().is_dirty("firstName"));
        }

        #[test]
        fn test_revalidates_on_change_after_submit() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.submit(|_| {});
            assert!(form.error("firstName").is_some());
            form.set_field_value("firstName", "Ada").unwrap();
            assert!(form.error("firstName").is_none());
        }
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_on_blur_mode_validates_left_field() {
            let mut form = controller(ValidationMode::OnBlur);
            form.set_field_value("firstName", "").unwrap();
            assert!(form.errors().is_empty());
            form.blur_field("firstName").unwrap();
            assert_eq!(
                form.error("firstName").map(|e| e.message.as_str()),
                Some("firstName is a required field")
            );
            assert!(form.state().is_touched("firstName"));
        }

        #[test]
        fn test_on_submit_mode_only_marks_touched() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.blur_field("firstName").unwrap();
            assert!(form.errors().is_empty());
            assert!(form.state().is_touched("firstName"));
        }

        #[test]
        fn test_on_touched_validates_changes_after_first_blur() {
            let mut form = controller(ValidationMode::OnTouched);
            form.set_field_value("age", -2).unwrap();
            assert!(form.errors().is_empty());
            form.blur_field("age").unwrap();
            assert!(form.error("age").is_some());
            form.set_field_value("age", 2).unwrap();
            assert!(form.error("age").is_none());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_fields_fail_on_defaults() {
            let form = controller(ValidationMode::OnSubmit);
            for name in ["firstName", "age"] {
                let error = form.validate_field(name).unwrap().unwrap();
                assert_eq!(error.rule, RuleKind::Required);
            }
        }

        #[test]
        fn test_validate_field_unknown_name() {
            let form = controller(ValidationMode::OnSubmit);
            assert_eq!(
                form.validate_field("nickname"),
                Err(FormError::UnknownField("nickname".to_string()))
            );
        }

        #[test]
        fn test_validate_field_does_not_store_errors() {
            let form = controller(ValidationMode::OnSubmit);
            assert!(form.validate_field("firstName").unwrap().is_some());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_trigger_stores_and_clears_errors() {
            let mut form = controller(ValidationMode::OnSubmit);
            assert!(form.trigger("firstName").unwrap().is_some());
            assert!(form.error("firstName").is_some());
            form.set_field_value("firstName", "Ada").unwrap();
            assert!(form.trigger("firstName").unwrap().is_none());
            assert!(form.error("firstName").is_none());
        }

        #[test]
        fn test_validate_all_agrees_with_validate_field() {
            let mut form = controller(ValidationMode::OnSubmit);
            let inputs: [(FieldValue, FieldValue); 4] = [
                ("".into(), 5.into()),
                ("Ada".into(), (-1).into()),
                ("Ada".into(), 3.into()),
                ("".into(), FieldValue::Null),
            ];
            for (first_name, age) in inputs {
                form.set_field_value("firstName", first_name).unwrap();
                form.set_field_value("age", age).unwrap();
                let all = form.validate_all();
                for name in ["firstName", "age"] {
                    let single = form.validate_field(name).unwrap();
                    assert_eq!(all.get(name).cloned(), single);
                }
                assert_eq!(
                    all.is_empty(),
                    ["firstName", "age"]
                        .iter()
                        .all(|name| form.validate_field(name).unwrap().is_none())
                );
            }
        }

        #[test]
        fn test_validate_all_is_idempotent() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("age", 2.5).unwrap();
            assert_eq!(form.validate_all(), form.validate_all());
        }

        #[test]
        fn test_missing_first_name_scenario() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("firstName", "").unwrap();
            form.set_field_value("age", 5).unwrap();
            let errors = form.validate_all();
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors["firstName"].message,
                "firstName is a required field"
            );
        }

        #[test]
        fn test_negative_age_scenario() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("firstName", "Ada").unwrap();
            form.set_field_value("age", -1).unwrap();
            let errors = form.validate_all();
            let names: Vec<_> = errors.keys().cloned().collect();
            assert_eq!(names, vec!["age".to_string()]);
            assert_eq!(errors["age"].message, "age must be a positive number");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submit_skips_callback_and_stores_errors() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("age", 5).unwrap();
            let mut called = false;
            let outcome = form.submit(|_| called = true);
            assert!(!called);
            assert!(!outcome.is_valid());
            assert!(form.error("firstName").is_some());
            assert!(form.state().is_submitted);
            assert_eq!(form.state().submit_count, 1);
        }

        #[test]
        fn test_valid_submit_passes_values() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("firstName", "Ada").unwrap();
            form.set_field_value("age", 3).unwrap();

            let mut received = None;
            let outcome = form.submit(|values| received = Some(values));

            let expected: FormValues = [
                ("firstName", FieldValue::from("Ada")),
                ("age", FieldValue::from(3)),
            ]
            .into_iter()
            .collect();
            assert_eq!(received, Some(expected.clone()));
            assert_eq!(outcome, SubmitOutcome::Valid(expected));
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_callback_copy_is_detached_from_later_changes() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.set_field_value("firstName", "Ada").unwrap();
            form.set_field_value("age", 3).unwrap();
            let mut received = None;
            form.submit(|values| received = Some(values));

            form.set_field_value("firstName", "Grace").unwrap();
            let received = received.unwrap();
            assert_eq!(received.get("firstName"), Some(&FieldValue::from("Ada")));
            assert_eq!(form.value("firstName"), Some(&FieldValue::from("Grace")));
        }

        #[test]
        fn test_submit_with_reports_errors() {
            let mut form = controller(ValidationMode::OnSubmit);
            let mut reported = Vec::new();
            form.submit_with(
                |_| panic!("must not be called"),
                |errors| reported = errors.keys().cloned().collect(),
            );
            assert_eq!(reported, vec!["age".to_string(), "firstName".to_string()]);
        }

        #[test]
        fn test_submit_clears_stale_errors() {
            let mut form = controller(ValidationMode::OnSubmit);
            form.submit(|_| {});
            assert_eq!(form.errors().len(), 2);
            form.set_field_value("firstName", "Ada").unwrap();
            form.set_field_value("age", 30).unwrap();
            let outcome = form.submit(|_| {});
            assert!(outcome.is_valid());
            assert!(form.errors().is_empty());
            assert_eq!(form.state().submit_count, 2);
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = controller(ValidationMode::OnBlur);
            form.set_field_value("firstName", "Ada").unwrap();
            form.blur_field("age").unwrap();
            form.submit(|_| {});
            form.reset();

            assert_eq!(form.value("firstName"), Some(&FieldValue::from("")));
            assert!(form.errors().is_empty());
            assert!(!form.state().is_submitted);
            assert!(!form.state().is_touched("age"));
            assert!(!form.state().is_form_dirty());
            assert_eq!(form.field("age").unwrap().validity, Validity::Pristine);
        }
    }

    mod bound_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validity_progression() {
            let mut form = controller(ValidationMode::OnBlur);
            assert_eq!(
                form.field("firstName").unwrap().validity,
                Validity::Pristine
            );

            form.blur_field("firstName").unwrap();
            let field = form.field("firstName").unwrap();
            assert_eq!(field.validity, Validity::Invalid);
            assert_eq!(field.help(), Some("firstName is a required field"));

            form.set_field_value("firstName", "Ada").unwrap();
            form.blur_field("firstName").unwrap();
            let field = form.field("firstName").unwrap();
            assert_eq!(field.validity, Validity::Valid);
            assert!(field.help().is_none());
            assert!(field.touched);
            assert!(field.dirty);
        }

        #[test]
        fn test_fields_follow_declaration_order() {
            let form = controller(ValidationMode::OnSubmit);
            let names: Vec<_> = form.fields().iter().map(|f| f.name).collect();
            assert_eq!(names, vec!["firstName", "age"]);
            assert!(form.field("nickname").is_none());
        }

        #[test]
        fn test_snapshot_is_independent() {
            let mut form = controller(ValidationMode::OnSubmit);
            let before = form.snapshot();
            form.set_field_value("firstName", "Ada").unwrap();
            assert_eq!(before.values.get("firstName"), Some(&FieldValue::from("")));
        }
    }
}
