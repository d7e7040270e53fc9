//! Validation rules and their interpreter

use super::error::{FieldError, RuleKind};
use super::field::{FieldKind, FieldValue};

/// A single declarative check applied to a field value
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must match the declared kind (skipped for null)
    Type(FieldKind),
    /// Value must not be null, "" or an empty set
    Required,
    /// Value must not be null
    Defined,
    /// Value must be a finite number greater than zero
    Positive,
    /// Value must be a finite number with no fractional part
    Integer,
    /// Value must be one of the listed values; null only if listed
    OneOf(Vec<FieldValue>),
    /// Value must strictly equal the literal
    Equals(FieldValue),
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Type(_) => RuleKind::Type,
            Rule::Required => RuleKind::Required,
            Rule::Defined => RuleKind::Defined,
            Rule::Positive => RuleKind::Positive,
            Rule::Integer => RuleKind::Integer,
            Rule::OneOf(_) => RuleKind::OneOf,
            Rule::Equals(_) => RuleKind::Equals,
        }
    }

    /// Evaluate the rule against a value
    pub fn passes(&self, value: &FieldValue) -> bool {
        match self {
            Rule::Type(kind) => kind.accepts(value),
            Rule::Required => !value.is_blank(),
            Rule::Defined => !value.is_null(),
            Rule::Positive => {
                matches!(value, FieldValue::Number(n) if n.is_finite() && *n > 0.0)
            }
            Rule::Integer => {
                matches!(value, FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0)
            }
            Rule::OneOf(allowed) => allowed.contains(value),
            Rule::Equals(literal) => value == literal,
        }
    }

    /// Message used when no custom message was supplied
    pub fn default_message(&self, label: &str) -> String {
        match self {
            Rule::Type(kind) => format!("{label} must be a `{}` type", kind.type_name()),
            Rule::Required => format!("{label} is a required field"),
            Rule::Defined => format!("{label} must be defined"),
            Rule::Positive => format!("{label} must be a positive number"),
            Rule::Integer => format!("{label} must be an integer"),
            Rule::OneOf(allowed) => {
                let values: Vec<String> = allowed.iter().map(FieldValue::display_value).collect();
                format!(
                    "{label} must be one of the following values: {}",
                    values.join(", ")
                )
            }
            Rule::Equals(literal) => format!("{label} must be {}", literal.display_value()),
        }
    }
}

/// A rule together with an optional custom message
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
    pub rule: Rule,
    pub message: Option<String>,
}

impl RuleSpec {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            message: None,
        }
    }

    /// Check the value and build the error when the rule fails
    pub fn check(&self, label: &str, value: &FieldValue) -> Option<FieldError> {
        if self.rule.passes(value) {
            return None;
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| self.rule.default_message(label));
        Some(FieldError::new(self.rule.kind(), message))
    }
}

/// Run rules in order and return the first failure
pub fn first_failure(rules: &[RuleSpec], label: &str, value: &FieldValue) -> Option<FieldError> {
    rules.iter().find_map(|spec| spec.check(label, value))
}
