//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod picker;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match &app.state.current_view {
        View::Picker => picker::draw(frame, main_area, app),
        View::Form => forms::draw_form(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modal overlays last so they sit on top
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    } else if app.state.show_submission {
        if let Some(record) = &app.state.last_submission {
            components::render_submission_dialog(frame, record);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{contains, render};
    use crate::app::App;
    use crate::config::TuiConfig;
    use crate::sink::SubmissionRecord;
    use crate::state::{DemoForm, FormValues};

    #[test]
    fn test_error_dialog_overlays_view() {
        let mut app = App::new(&TuiConfig::default());
        app.push_error("Failed to submit Person: disk full");
        let rows = render(&app, 80, 24);
        assert!(contains(&rows, "Error"));
        assert!(contains(&rows, "disk full"));
    }

    #[test]
    fn test_submission_dialog_shows_values() {
        let mut app = App::new(&TuiConfig::default());
        app.state.open_form(DemoForm::FirstName).unwrap();
        let values: FormValues = [("firstName", "Ada")].into_iter().collect();
        app.state.last_submission = Some(SubmissionRecord::new("First Name", values));
        app.state.show_submission = true;

        let rows = render(&app, 80, 24);
        assert!(contains(&rows, "Submitted"));
        assert!(contains(&rows, "\"firstName\": \"Ada\""));
    }

    #[test]
    fn test_error_dialog_wins_over_submission() {
        let mut app = App::new(&TuiConfig::default());
        app.state.last_submission = Some(SubmissionRecord::new("Person", FormValues::new()));
        app.state.show_submission = true;
        app.push_error("boom");
        let rows = render(&app, 80, 24);
        assert!(contains(&rows, "boom"));
        assert!(!contains(&rows, "Submitted"));
    }
}
