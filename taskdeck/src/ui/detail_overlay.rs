//! Detail overlay rendering: a centered modal showing the full title and
//! description of the selected task.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme;
use crate::app::App;

/// Render the detail overlay for the selected task, if the selection still
/// resolves. Drawn over the rest of the UI.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(task) = app.manager.selected_task() else {
        return;
    };

    let popup = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            "Task details",
            theme::panel_title(theme::OVERLAY_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    let status = if task.completed { "done" } else { "open" };
    let text = vec![
        Line::from(Span::styled(task.title.clone(), theme::bold())),
        Line::from(Span::styled(format!("status: {status}"), theme::dimmed())),
        Line::default(),
        Line::from(Span::styled(task.description.clone(), theme::normal())),
        Line::default(),
        Line::from(Span::styled("Esc/Enter: close", theme::dimmed())),
    ];

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}

/// Compute a centered rect covering the given percentage of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
