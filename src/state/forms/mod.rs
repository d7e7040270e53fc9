//! Form domain layer
//!
//! Field values, the declarative validation schema, and the
//! [`FormController`] that binds the two together. Nothing in here knows
//! about the terminal; `session` adds the widget glue the UI needs.

mod binding;
mod catalog;
mod controller;
mod error;
mod field;
mod form_state;
mod rules;
mod schema;
mod session;

pub use binding::{FieldBinding, Widget};
pub use catalog::{DemoForm, Gender};
pub use controller::{BoundField, FormController, SubmitOutcome, ValidationMode, Validity};
pub use error::{FieldError, FormError, RuleKind};
pub use field::{FieldKind, FieldValue};
pub use form_state::{FieldErrors, FormState, FormValues};
pub use rules::{Rule, RuleSpec};
pub use schema::{FieldSchema, SchemaBuilder, ValidationSchema};
pub use session::{Form, FormButton, FormSession, InputBuffer};
