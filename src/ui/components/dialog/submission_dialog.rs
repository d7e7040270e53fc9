//! Dialog showing the values of an accepted submission

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::sink::SubmissionRecord;
use ratatui::{style::Color, Frame};

/// Render the submitted values as pretty JSON
pub fn render_submission_dialog(frame: &mut Frame, record: &SubmissionRecord) {
    let body = record
        .values_json()
        .unwrap_or_else(|e| format!("<values unavailable: {e}>"));
    let message = format!(
        "{} at {}\n\n{}",
        record.form,
        record.submitted_at.format("%H:%M:%S"),
        body
    );

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(key_hint("close")),
            max_width: 70,
        },
    );
}
