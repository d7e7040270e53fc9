//! Open form rendering

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FormButton, FormSession};
use crate::ui::components::{render_button, BUTTON_HEIGHT, BUTTON_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the open form, if any
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = &app.state.session else {
        return;
    };

    let block = Block::default()
        .title(format!(
            " {} ({}) ",
            session.form.title(),
            session.controller.mode().label()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // Description
    constraints.extend(session.bindings.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let description = Paragraph::new(Span::styled(
        session.form.description(),
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(description, chunks[0]);

    for (index, binding) in session.bindings.iter().enumerate() {
        let Some(bound) = session.controller.field(&binding.name) else {
            continue;
        };
        let view = FieldView {
            binding,
            bound,
            input: &session.inputs[index],
            is_active: session.active_field_index == index,
        };
        draw_field(frame, chunks[index + 1], &view);
    }

    let buttons_index = session.bindings.len() + 1;
    draw_buttons(frame, chunks[buttons_index], session);
    draw_help_text(frame, chunks[buttons_index + 2]);
}

/// Reset and Submit buttons, side by side
fn draw_buttons(frame: &mut Frame, area: Rect, session: &FormSession) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    let on_row = session.is_buttons_row_active();
    for (slot, button) in [(0, FormButton::Reset), (2, FormButton::Submit)] {
        let accent = match button {
            FormButton::Reset => Color::Yellow,
            FormButton::Submit => Color::Green,
        };
        let is_selected = on_row && session.selected_button() == button;
        render_button(frame, chunks[slot], button.label(), is_selected, accent);
    }
}

fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let help = Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(":next  "),
        Span::styled("←/→", key),
        Span::raw(":choose  "),
        Span::styled("Space", key),
        Span::raw(":toggle  "),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::raw(":submit  "),
        Span::styled(RESET_SHORTCUT, key),
        Span::raw(":reset  "),
        Span::styled("Esc", key),
        Span::raw(":back"),
    ]);
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
