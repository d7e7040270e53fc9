//! Demo forms shipped with the app
//!
//! - `FirstName`: a single required text input with a custom message
//! - `Person`: text, number and select inputs validated on blur
//! - `Preferences`: radio, checkbox group and acknowledgement checkbox

use super::binding::FieldBinding;
use super::controller::{FormController, ValidationMode};
use super::error::FormError;
use super::schema::{FieldSchema, ValidationSchema};

/// Gender choices offered by the person form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

const CONTACT_OPTIONS: [&str; 2] = ["email", "phone"];
const TOPIC_OPTIONS: [&str; 4] = ["rust", "forms", "terminals", "testing"];

/// Forms selectable from the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoForm {
    FirstName,
    Person,
    Preferences,
}

impl DemoForm {
    pub const ALL: [DemoForm; 3] = [DemoForm::FirstName, DemoForm::Person, DemoForm::Preferences];

    pub fn title(&self) -> &'static str {
        match self {
            DemoForm::FirstName => "First Name",
            DemoForm::Person => "Person",
            DemoForm::Preferences => "Preferences",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DemoForm::FirstName => "One required text field with a custom message",
            DemoForm::Person => "Names, a positive integer age and a gender select",
            DemoForm::Preferences => "Radio group, checkbox group and terms acknowledgement",
        }
    }

    pub fn mode(&self) -> ValidationMode {
        match self {
            DemoForm::FirstName => ValidationMode::OnSubmit,
            DemoForm::Person => ValidationMode::OnBlur,
            DemoForm::Preferences => ValidationMode::OnChange,
        }
    }

    pub fn schema(&self) -> Result<ValidationSchema, FormError> {
        match self {
            DemoForm::FirstName => ValidationSchema::builder()
                .field(
                    "firstName",
                    FieldSchema::string()
                        .required()
                        .with_message("first name is required"),
                )
                .build(),
            DemoForm::Person => ValidationSchema::builder()
                .field("firstName", FieldSchema::string().required())
                .field("lastName", FieldSchema::string().required())
                .field(
                    "age",
                    FieldSchema::number().required().positive().integer(),
                )
                .field(
                    "gender",
                    FieldSchema::mixed()
                        .one_of(Gender::ALL.iter().map(Gender::as_str))
                        .defined(),
                )
                .build(),
            DemoForm::Preferences => ValidationSchema::builder()
                .field(
                    "contact",
                    FieldSchema::string()
                        .required()
                        .one_of(CONTACT_OPTIONS),
                )
                .field("topics", FieldSchema::set().required())
                .field("newsletter", FieldSchema::boolean())
                .field(
                    "terms",
                    FieldSchema::boolean()
                        .equals(true)
                        .with_message("terms must be accepted"),
                )
                .build(),
        }
    }

    /// Widgets in display order
    pub fn bindings(&self) -> Vec<FieldBinding> {
        match self {
            DemoForm::FirstName => vec![FieldBinding::text("firstName", "First Name")],
            DemoForm::Person => {
                let genders: Vec<&str> = Gender::ALL.iter().map(Gender::as_str).collect();
                vec![
                    FieldBinding::text("firstName", "First Name"),
                    FieldBinding::text("lastName", "Last Name"),
                    FieldBinding::number("age", "Age"),
                    FieldBinding::select("gender", "Gender", &genders),
                ]
            }
            DemoForm::Preferences => vec![
                FieldBinding::radio("contact", "Preferred Contact", &CONTACT_OPTIONS),
                FieldBinding::checkbox_group("topics", "Topics", &TOPIC_OPTIONS),
                FieldBinding::checkbox("newsletter", "Subscribe to newsletter"),
                FieldBinding::checkbox("terms", "I accept the terms"),
            ],
        }
    }

    /// Fresh controller for this form
    pub fn controller(&self) -> Result<FormController, FormError> {
        Ok(FormController::new(self.schema()?, self.mode()))
    }
}
