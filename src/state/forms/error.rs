//! Form error types
//!
//! Two kinds of failure exist. [`FieldError`] is a validation result shown
//! inline next to a field and travels as data. [`FormError`] is a programming
//! mistake in how a form is wired (unknown or duplicate field names).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while declaring or addressing form fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` is already registered")]
    DuplicateField(String),
}

/// Which rule produced a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Type,
    Required,
    Defined,
    Positive,
    Integer,
    OneOf,
    Equals,
}

/// User-facing validation failure for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub rule: RuleKind,
    pub message: String,
}

impl FieldError {
    pub fn new(rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
