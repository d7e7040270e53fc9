//! Form field value objects

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;

/// Type-safe field values
///
/// `Null` stands for a field that has no value yet (an untouched select or an
/// empty number input).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    /// Whole numbers serialize as integers
    #[serde(serialize_with = "serialize_number")]
    Number(f64),
    Text(String),
    Set(BTreeSet<String>),
}

impl FieldValue {
    /// Build a set value from any list of strings
    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// True for values a `required` rule rejects: null, "" and the empty set
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Set(items) => items.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
        }
    }

    /// Get the text value (returns empty string for other variants)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    pub fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            FieldValue::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Add or remove `item` from a set value. Non-set values become a set.
    pub fn toggle_member(&mut self, item: &str) {
        if let FieldValue::Set(items) = self {
            if !items.remove(item) {
                items.insert(item.to_string());
            }
        } else {
            *self = FieldValue::set([item]);
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Set(items) => items.iter().cloned().collect::<Vec<_>>().join(", "),
        }
    }
}

fn whole_number(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15).then_some(n as i64)
}

fn format_number(n: f64) -> String {
    match whole_number(n) {
        Some(whole) => whole.to_string(),
        None => n.to_string(),
    }
}

fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match whole_number(*n) {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(*n),
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<BTreeSet<String>> for FieldValue {
    fn from(value: BTreeSet<String>) -> Self {
        FieldValue::Set(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Semantic type a field is declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Set,
    /// Accepts any value; used for enumerations
    Mixed,
}

impl FieldKind {
    /// Whether a non-null value has this kind. Numbers must be finite.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FieldKind::Mixed, _) => true,
            (_, FieldValue::Null) => true,
            (FieldKind::String, FieldValue::Text(_)) => true,
            (FieldKind::Number, FieldValue::Number(n)) => n.is_finite(),
            (FieldKind::Boolean, FieldValue::Bool(_)) => true,
            (FieldKind::Set, FieldValue::Set(_)) => true,
            _ => false,
        }
    }

    /// Value a field of this kind starts with
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::String => FieldValue::Text(String::new()),
            FieldKind::Boolean => FieldValue::Bool(false),
            FieldKind::Set => FieldValue::Set(BTreeSet::new()),
            FieldKind::Number | FieldKind::Mixed => FieldValue::Null,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Set => "array",
            FieldKind::Mixed => "mixed",
        }
    }
}
