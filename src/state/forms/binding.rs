//! Association between a schema field and the widget that edits it

/// Input control used to display and edit a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    TextInput,
    /// Free text parsed as a number; unparsable input becomes NaN
    NumberInput,
    /// Single choice shown as the current option
    Select(Vec<String>),
    /// Single choice shown with every option inline
    Radio(Vec<String>),
    Checkbox,
    /// Multiple choice producing a set of strings
    CheckboxGroup(Vec<String>),
}

impl Widget {
    pub fn options(&self) -> &[String] {
        match self {
            Widget::Select(options) | Widget::Radio(options) | Widget::CheckboxGroup(options) => {
                options
            }
            Widget::TextInput | Widget::NumberInput | Widget::Checkbox => &[],
        }
    }

    /// Whether typed characters edit this widget
    pub fn accepts_text(&self) -> bool {
        matches!(self, Widget::TextInput | Widget::NumberInput)
    }
}

/// Represents a single bound form field with its widget and display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub name: String,
    pub label: String,
    pub widget: Widget,
}

impl FieldBinding {
    fn new(name: &str, label: &str, widget: Widget) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            widget,
        }
    }

    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, Widget::TextInput)
    }

    /// Create a new number field
    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, Widget::NumberInput)
    }

    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(name, label, Widget::Select(to_owned(options)))
    }

    pub fn radio(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(name, label, Widget::Radio(to_owned(options)))
    }

    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, Widget::Checkbox)
    }

    pub fn checkbox_group(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(name, label, Widget::CheckboxGroup(to_owned(options)))
    }
}

fn to_owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}
