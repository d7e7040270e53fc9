//! Field rendering utilities for forms

use crate::state::{BoundField, FieldBinding, InputBuffer, Validity, Widget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus a help line
pub const FIELD_HEIGHT: u16 = 4;

/// Everything needed to draw one field
pub struct FieldView<'a> {
    pub binding: &'a FieldBinding,
    pub bound: BoundField<'a>,
    pub input: &'a InputBuffer,
    pub is_active: bool,
}

/// Draw a bound field: the widget, a feedback indicator and inline help
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = match (view.is_active, view.bound.validity) {
        (true, _) => Color::Cyan,
        (false, Validity::Invalid) => Color::Red,
        (false, _) => Color::DarkGray,
    };

    let mut title = vec![Span::raw(format!(" {} ", view.binding.label))];
    if let Some(indicator) = feedback_indicator(view.bound.validity) {
        title.push(indicator);
        title.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let content = Paragraph::new(widget_line(view)).block(block);
    frame.render_widget(content, chunks[0]);

    if let Some(help) = view.bound.help() {
        let help = Paragraph::new(Span::styled(
            format!(" {help}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(help, chunks[1]);
    }
}

/// ✓ or ✗ once the field has been validated
fn feedback_indicator(validity: Validity) -> Option<Span<'static>> {
    match validity {
        Validity::Pristine => None,
        Validity::Valid => Some(Span::styled("✓", Style::default().fg(Color::Green))),
        Validity::Invalid => Some(Span::styled("✗", Style::default().fg(Color::Red))),
    }
}

/// Render the widget's current state as a single line
fn widget_line<'a>(view: &FieldView<'a>) -> Line<'a> {
    let value_style = if view.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let placeholder = Style::default().fg(Color::DarkGray);
    let cursor_style = Style::default().fg(Color::Cyan);

    match &view.binding.widget {
        Widget::TextInput | Widget::NumberInput => {
            let text = &view.input.text;
            if view.is_active {
                Line::from(vec![
                    Span::styled(text.clone(), value_style),
                    Span::styled("▌", cursor_style),
                ])
            } else if text.is_empty() {
                Line::from(Span::styled("(empty)", placeholder))
            } else {
                Line::from(Span::styled(text.clone(), value_style))
            }
        }
        Widget::Select(_) => {
            let current = view.bound.value.display_value();
            let shown = if current.is_empty() {
                Span::styled("(choose)", placeholder)
            } else {
                Span::styled(current, value_style)
            };
            if view.is_active {
                Line::from(vec![
                    Span::styled("◀ ", cursor_style),
                    shown,
                    Span::styled(" ▶", cursor_style),
                ])
            } else {
                Line::from(shown)
            }
        }
        Widget::Radio(options) => {
            let current = view.bound.value.as_text();
            option_spans(options, |option, _| option == current, None, "(•)", "( )")
        }
        Widget::Checkbox => {
            let mark = if view.bound.value.as_bool() { "[x]" } else { "[ ]" };
            Line::from(Span::styled(mark, value_style))
        }
        Widget::CheckboxGroup(options) => {
            let chosen = view.bound.value.as_set();
            let cursor = view.is_active.then_some(view.input.cursor);
            option_spans(
                options,
                |option, _| chosen.is_some_and(|set| set.contains(option)),
                cursor,
                "[x]",
                "[ ]",
            )
        }
    }
}

/// Inline list of options with a mark per option
fn option_spans<'a>(
    options: &'a [String],
    is_marked: impl Fn(&str, usize) -> bool,
    cursor: Option<usize>,
    on: &'static str,
    off: &'static str,
) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let mark = if is_marked(option, i) { on } else { off };
        let style = if cursor == Some(i) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{mark} {option}"), style));
    }
    Line::from(spans)
}
