//! Form state snapshot: values, errors and submission bookkeeping

use super::error::FieldError;
use super::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Field name to validation error; only failing fields are present
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Current value of every declared field, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(IndexMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Insert or replace a value, returning the previous one.
    /// A replaced value keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Everything the presentation layer needs to render a form at one instant
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    /// Fields that lost focus at least once
    pub touched: BTreeSet<String>,
    /// Fields whose value differs from the default
    pub dirty: BTreeSet<String>,
    pub is_submitted: bool,
    pub submit_count: u32,
}

impl FormState {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    /// True when any field differs from its default
    pub fn is_form_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}
