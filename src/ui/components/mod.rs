//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT, BUTTON_WIDTH};
pub use dialog::{render_error_dialog, render_submission_dialog};
