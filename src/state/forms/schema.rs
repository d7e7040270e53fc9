//! Declarative validation schema
//!
//! A [`ValidationSchema`] is an ordered list of named [`FieldSchema`]s. Each
//! field schema carries its kind, default value and an ordered rule list that
//! is evaluated left to right, stopping at the first failure.
//!
//! ```ignore
//! let schema = ValidationSchema::builder()
//!     .field("firstName", FieldSchema::string().required())
//!     .field("age", FieldSchema::number().required().positive().integer())
//!     .build()?;
//! ```

use super::error::{FieldError, FormError};
use super::field::{FieldKind, FieldValue};
use super::rules::{first_failure, Rule, RuleSpec};

/// Rules and defaults for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    kind: FieldKind,
    label: Option<String>,
    default: FieldValue,
    rules: Vec<RuleSpec>,
}

impl FieldSchema {
    fn of_kind(kind: FieldKind) -> Self {
        let rules = match kind {
            FieldKind::Mixed => Vec::new(),
            _ => vec![RuleSpec::new(Rule::Type(kind))],
        };
        Self {
            kind,
            label: None,
            default: kind.default_value(),
            rules,
        }
    }

    pub fn string() -> Self {
        Self::of_kind(FieldKind::String)
    }

    pub fn number() -> Self {
        Self::of_kind(FieldKind::Number)
    }

    pub fn boolean() -> Self {
        Self::of_kind(FieldKind::Boolean)
    }

    pub fn set() -> Self {
        Self::of_kind(FieldKind::Set)
    }

    pub fn mixed() -> Self {
        Self::of_kind(FieldKind::Mixed)
    }

    /// Name used in default messages instead of the field name
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = value.into();
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn defined(self) -> Self {
        self.rule(Rule::Defined)
    }

    pub fn positive(self) -> Self {
        self.rule(Rule::Positive)
    }

    pub fn integer(self) -> Self {
        self.rule(Rule::Integer)
    }

    pub fn one_of<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        self.rule(Rule::OneOf(values.into_iter().map(Into::into).collect()))
    }

    pub fn equals(self, literal: impl Into<FieldValue>) -> Self {
        self.rule(Rule::Equals(literal.into()))
    }

    /// Append an arbitrary rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(RuleSpec::new(rule));
        self
    }

    /// Override the message of the most recently added rule
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.rules.last_mut() {
            last.message = Some(message.into());
        }
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn initial_value(&self) -> &FieldValue {
        &self.default
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn has_rule(&self, rule: &Rule) -> bool {
        self.rules.iter().any(|spec| &spec.rule == rule)
    }

    /// Evaluate the rules against `value`; `name` is used when no label is set
    pub fn validate(&self, name: &str, value: &FieldValue) -> Option<FieldError> {
        let label = self.label.as_deref().unwrap_or(name);
        first_failure(&self.rules, label, value)
    }
}

/// Ordered set of field schemas keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSchema {
    fields: Vec<(String, FieldSchema)>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Declare a field. Declaring the same name twice is an error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        schema: FieldSchema,
    ) -> Result<(), FormError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(FormError::DuplicateField(name));
        }
        self.fields.push((name, schema));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, schema)| schema)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields
            .iter()
            .map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Collects field declarations and reports duplicates on `build`
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, FieldSchema)>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.push((name.into(), schema));
        self
    }

    pub fn build(self) -> Result<ValidationSchema, FormError> {
        let mut schema = ValidationSchema::new();
        for (name, field) in self.fields {
            schema.register(name, field)?;
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::error::RuleKind;

    #[test]
    fn test_typed_schemas_start_with_type_rule() {
        let schema = FieldSchema::number().required();
        assert_eq!(schema.rules()[0].rule, Rule::Type(FieldKind::Number));
        assert_eq!(schema.rules()[1].rule, Rule::Required);
    }

    #[test]
    fn test_mixed_schema_has_no_type_rule() {
        assert!(FieldSchema::mixed().rules().is_empty());
    }

    #[test]
    fn test_defaults_follow_kind() {
        assert_eq!(FieldSchema::string().initial_value(), &FieldValue::from(""));
        assert_eq!(FieldSchema::number().initial_value(), &FieldValue::Null);
        assert_eq!(
            FieldSchema::boolean().default_value(true).initial_value(),
            &FieldValue::Bool(true)
        );
    }

    #[test]
    fn test_with_message_targets_last_rule() {
        let schema = FieldSchema::string()
            .required()
            .with_message("first name is required");
        let error = schema.validate("firstName", &FieldValue::from("")).unwrap();
        assert_eq!(error.message, "first name is required");
    }

    #[test]
    fn test_label_replaces_name_in_messages() {
        let schema = FieldSchema::string().label("First name").required();
        let error = schema.validate("firstName", &FieldValue::from("")).unwrap();
        assert_eq!(error.message, "First name is a required field");
    }

    #[test]
    fn test_validate_reports_first_failing_rule() {
        let schema = FieldSchema::number().required().positive().integer();
        let error = schema.validate("age", &FieldValue::from(-1)).unwrap();
        assert_eq!(error.rule, RuleKind::Positive);
        let error = schema.validate("age", &FieldValue::from(1.5)).unwrap();
        assert_eq!(error.rule, RuleKind::Integer);
    }

    #[test]
    fn test_builder_keeps_declaration_order() {
        let schema = ValidationSchema::builder()
            .field("lastName", FieldSchema::string())
            .field("firstName", FieldSchema::string())
            .build()
            .unwrap();
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["lastName", "firstName"]);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let result = ValidationSchema::builder()
            .field("age", FieldSchema::number())
            .field("age", FieldSchema::number().positive())
            .build();
        assert_eq!(result, Err(FormError::DuplicateField("age".to_string())));
    }

    #[test]
    fn test_register_leaves_schema_untouched_on_duplicate() {
        let mut schema = ValidationSchema::new();
        schema.register("age", FieldSchema::number()).unwrap();
        let result = schema.register("age", FieldSchema::number().positive());
        assert!(result.is_err());
        assert!(!schema.get("age").unwrap().has_rule(&Rule::Positive));
    }
}
