//! Form picker view

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::DemoForm;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the list of demo forms
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = DemoForm::ALL
        .iter()
        .map(|form| {
            let mode = app.state.mode_override.unwrap_or_else(|| form.mode());
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        form.title(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  [{}]", mode.label()),
                        Style::default().fg(Color::Magenta),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", form.description()),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Forms ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    render_scrollable_list(frame, area, list, app.state.selected_index);
}
